use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::sparkles::SparkleTimer;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;
use tokio::runtime::Handle;

/// Runs the page until the user quits or shutdown is signaled.
///
/// The sparkle timer is started after the terminal is set up and cancelled
/// before it is restored.
pub fn run(config: &Config, runtime: &Handle, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let sparkle_timer = config.sparkles.enabled.then(|| {
        SparkleTimer::start(
            runtime,
            config.sparkles.interval(),
            shutdown.handle(),
            events.sender(),
        )
    });

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Ok(AppEvent::Sparkle) => app.on_sparkle(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    shutdown.signal();
    drop(sparkle_timer);
    drop(guard);
    result
}
