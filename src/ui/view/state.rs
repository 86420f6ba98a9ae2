use std::collections::BTreeSet;

use crate::catalog::{filter_breeds, BreedRecord, BREEDS};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Breeds,
    Facts,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Breeds, Tab::Facts];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Breeds => "Cat Breeds",
            Tab::Facts => "Cat Facts",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Breeds => 0,
            Tab::Facts => 1,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Breeds => Tab::Facts,
            Tab::Facts => Tab::Breeds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub search_query: String,
    /// Always a subset of the catalog's breed names.
    pub liked_names: BTreeSet<String>,
    /// Index into [`ViewState::filtered`].
    pub cursor: usize,
    /// When true, typed characters edit the query instead of running commands.
    pub search_focused: bool,
}

impl UiState for ViewState {}

impl ViewState {
    /// Breeds matching the current query, in catalog order.
    pub fn filtered(&self) -> Vec<&'static BreedRecord> {
        filter_breeds(BREEDS, &self.search_query)
    }

    pub fn highlighted(&self) -> Option<&'static BreedRecord> {
        self.filtered().get(self.cursor).copied()
    }

    pub fn is_liked(&self, name: &str) -> bool {
        self.liked_names.contains(name)
    }

    pub fn liked_count(&self) -> usize {
        self.liked_names.len()
    }
}
