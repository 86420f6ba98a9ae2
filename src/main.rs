use anyhow::Context;
use clap::Parser;
use feline::cli::Cli;
use feline::config::Config;
use feline::logging::init_tracing;
use feline::shutdown::ShutdownCoordinator;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);

    // The terminal is not in raw mode yet, so stderr is still usable here.
    match init_tracing(&config.logging) {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Warning: logging disabled: {err}"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("feline-rt")
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    tracing::info!(
        sparkles = config.sparkles.enabled,
        tick_rate_ms = config.ui.tick_rate_ms,
        "Starting Feline Fascination"
    );
    feline::ui::runtime::run(&config, runtime.handle(), &shutdown).context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Exited cleanly");
    Ok(())
}
