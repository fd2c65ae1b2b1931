//! Local UI chrome state.
//!
//! Keeps presentation preferences out of session and article state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
