//! Session-local view state: active tab, search query, liked breeds.

mod intent;
mod reducer;
mod state;

pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::{Tab, ViewState};
