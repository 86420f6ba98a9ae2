use std::time::Instant;

use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::sparkles::SparkleField;
use crate::ui::view::{ViewIntent, ViewReducer, ViewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root of the UI: owns the view state and the decorative sparkle field.
pub struct App {
    should_quit: bool,
    view: ViewState,
    sparkles: SparkleField,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_sparkles(SparkleField::new(
            config.sparkles.lifetime(),
            config.sparkles.max_alive,
        ))
    }

    /// Like [`App::new`], with a reproducible sparkle placement.
    pub fn with_sparkle_seed(config: &Config, seed: u64) -> Self {
        Self::with_sparkles(SparkleField::with_seed(
            config.sparkles.lifetime(),
            config.sparkles.max_alive,
            seed,
        ))
    }

    fn with_sparkles(sparkles: SparkleField) -> Self {
        Self {
            should_quit: false,
            view: ViewState::default(),
            sparkles,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sparkles(&self) -> &SparkleField {
        &self.sparkles
    }

    pub fn dispatch(&mut self, intent: ViewIntent) {
        tracing::trace!(?intent, "Dispatching view intent");
        dispatch_mvi!(self, view, ViewReducer, intent);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.sparkles.expire(now);
    }

    pub fn on_sparkle(&mut self, now: Instant) {
        self.sparkles.expire(now);
        self.sparkles.spawn(now);
    }
}
