//! Screen modules for msgcat.
//!
//! This module provides individual screen handlers for the menu entries.

mod add;
mod common;
mod delete;
mod listing;
mod search;

pub use add::AddScreen;
pub use common::{is_end_of_input, parse_number, ScreenContext};
pub use delete::DeleteScreen;
pub use listing::ListingScreen;
pub use search::SearchScreen;

/// Result of a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    /// Show the main menu again.
    Continue,
    /// User wants to quit.
    Quit,
}
