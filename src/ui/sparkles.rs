//! Decorative sparkles drawn over the page body.
//!
//! [`SparkleTimer`] is a cancellable tokio task that emits [`AppEvent::Sparkle`]
//! on a fixed interval. [`SparkleField`] owns the live glyphs and is advanced by
//! the UI thread. Neither touches the view state.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

const GLYPHS: [char; 4] = ['✦', '✧', '⋆', '·'];

/// Positions are stored in thousandths of the render area.
pub const POSITION_SCALE: u16 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub born: Instant,
}

impl Sparkle {
    /// True during the second half of the sparkle's lifetime.
    pub fn is_fading(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.born) >= lifetime / 2
    }
}

pub struct SparkleField {
    sparkles: Vec<Sparkle>,
    lifetime: Duration,
    max_alive: usize,
    rng: StdRng,
}

impl SparkleField {
    pub fn new(lifetime: Duration, max_alive: usize) -> Self {
        Self::with_rng(lifetime, max_alive, StdRng::from_entropy())
    }

    /// Same placement sequence for the same seed.
    pub fn with_seed(lifetime: Duration, max_alive: usize, seed: u64) -> Self {
        Self::with_rng(lifetime, max_alive, StdRng::seed_from_u64(seed))
    }

    fn with_rng(lifetime: Duration, max_alive: usize, rng: StdRng) -> Self {
        Self {
            sparkles: Vec::with_capacity(max_alive),
            lifetime,
            max_alive,
            rng,
        }
    }

    /// Adds one sparkle at a pseudo-random position.
    ///
    /// Returns false when the field is already at capacity.
    pub fn spawn(&mut self, now: Instant) -> bool {
        if self.sparkles.len() >= self.max_alive {
            return false;
        }
        let x = self.rng.gen_range(0..POSITION_SCALE);
        let y = self.rng.gen_range(0..POSITION_SCALE);
        let glyph = GLYPHS.choose(&mut self.rng).copied().unwrap_or(GLYPHS[0]);
        self.sparkles.push(Sparkle {
            x,
            y,
            glyph,
            born: now,
        });
        true
    }

    /// Drops every sparkle older than the configured lifetime.
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.sparkles
            .retain(|sparkle| now.saturating_duration_since(sparkle.born) < lifetime);
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }
}

/// Periodic sparkle trigger tied to the lifetime of the view.
///
/// The task stops when [`cancel`](Self::cancel) is called, when the timer is
/// dropped, when shutdown is signaled, or when the event receiver goes away.
pub struct SparkleTimer {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl SparkleTimer {
    pub fn start(
        runtime: &Handle,
        interval: Duration,
        shutdown: ShutdownHandle,
        sender: Sender<AppEvent>,
    ) -> Self {
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = shutdown.wait() => break,
                    _ = ticker.tick() => {
                        if sender.send(AppEvent::Sparkle).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Sparkle timer stopped");
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "Sparkle timer started");
        Self {
            task: Mutex::new(Some(task)),
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for SparkleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_respects_capacity() {
        let now = Instant::now();
        let mut field = SparkleField::with_seed(Duration::from_secs(1), 3, 42);
        assert!(field.spawn(now));
        assert!(field.spawn(now));
        assert!(field.spawn(now));
        assert!(!field.spawn(now));
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn positions_stay_in_scale() {
        let now = Instant::now();
        let mut field = SparkleField::with_seed(Duration::from_secs(1), 64, 7);
        while field.spawn(now) {}
        assert!(field
            .sparkles()
            .iter()
            .all(|s| s.x < POSITION_SCALE && s.y < POSITION_SCALE && GLYPHS.contains(&s.glyph)));
    }

    #[test]
    fn same_seed_gives_same_placement() {
        let now = Instant::now();
        let mut first = SparkleField::with_seed(Duration::from_secs(1), 8, 99);
        let mut second = SparkleField::with_seed(Duration::from_secs(1), 8, 99);
        while first.spawn(now) {}
        while second.spawn(now) {}
        assert_eq!(first.sparkles(), second.sparkles());
    }

    #[test]
    fn expire_removes_only_old_sparkles() {
        let start = Instant::now();
        let lifetime = Duration::from_millis(100);
        let mut field = SparkleField::with_seed(lifetime, 4, 1);
        field.spawn(start);
        field.spawn(start + Duration::from_millis(80));

        field.expire(start + Duration::from_millis(100));
        assert_eq!(field.len(), 1);

        field.expire(start + Duration::from_millis(180));
        assert!(field.is_empty());
    }

    #[test]
    fn fading_starts_at_half_life() {
        let start = Instant::now();
        let lifetime = Duration::from_millis(100);
        let sparkle = Sparkle {
            x: 0,
            y: 0,
            glyph: '✦',
            born: start,
        };
        assert!(!sparkle.is_fading(start + Duration::from_millis(49), lifetime));
        assert!(sparkle.is_fading(start + Duration::from_millis(50), lifetime));
    }
}
