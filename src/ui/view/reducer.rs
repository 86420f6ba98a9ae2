use crate::catalog::is_known_breed;
use crate::ui::mvi::Reducer;
use crate::ui::view::intent::ViewIntent;
use crate::ui::view::state::{Tab, ViewState};

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::SetActiveTab(tab) => {
                state.active_tab = tab;
                state
            }
            ViewIntent::NextTab => {
                state.active_tab = state.active_tab.next();
                state
            }
            ViewIntent::SetSearchQuery(text) => {
                state.search_query = text;
                state.cursor = 0;
                state
            }
            ViewIntent::FocusSearch => {
                // The search box only exists on the breeds tab
                state.active_tab = Tab::Breeds;
                state.search_focused = true;
                state
            }
            ViewIntent::BlurSearch => {
                state.search_focused = false;
                state
            }
            ViewIntent::ToggleLike(name) => toggle_like(state, name),
            ViewIntent::ToggleLikeAtCursor => match state.highlighted() {
                Some(breed) => toggle_like(state, breed.name.to_string()),
                None => state,
            },
            ViewIntent::MoveCursor(delta) => {
                let len = state.filtered().len();
                if len == 0 {
                    return state;
                }
                let len = len as isize;
                let current = (state.cursor as isize).min(len - 1);
                state.cursor = (current + delta).rem_euclid(len) as usize;
                state
            }
        }
    }
}

fn toggle_like(mut state: ViewState, name: String) -> ViewState {
    if !is_known_breed(&name) {
        return state;
    }
    if !state.liked_names.remove(&name) {
        state.liked_names.insert(name);
    }
    state
}
