//! Menu handling module.
//!
//! Provides menu actions and parsing for the main menu and the
//! "add new message" sub-menu.

/// Main menu text, ending with the choice prompt.
pub const MAIN_MENU: &str = "\
####  MESSAGES SYSTEM MENU  ####
(1) Add new message.
(2) Delete a message.
(3) Print all messages.
(4) Search messages by words.
(5) Print all digital messages.
(6) Print all message previews.
(7) Exit.
Please enter your choice: ";

/// Sub-menu text for choosing the kind of message to add.
pub const ADD_MENU: &str = "\
####  ADD NEW MESSAGE  ####
(1) Board Message.
(2) Email Message.
(3) Reaction.
Please enter your choice: ";

/// Menu action representing user's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Add a board, email or reaction message.
    AddMessage,
    /// Delete a message by id.
    DeleteMessage,
    /// Print every message.
    PrintAll,
    /// Count messages containing any of some words.
    Search,
    /// Print messages with a digital transport.
    PrintDigital,
    /// Print one preview line per message.
    PrintPreviews,
    /// Leave the program.
    Exit,
    /// Invalid or unknown action.
    Invalid(String),
}

impl MenuAction {
    /// Parse a menu action from user input.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuAction::AddMessage,
            "2" => MenuAction::DeleteMessage,
            "3" => MenuAction::PrintAll,
            "4" => MenuAction::Search,
            "5" => MenuAction::PrintDigital,
            "6" => MenuAction::PrintPreviews,
            "7" => MenuAction::Exit,
            other => MenuAction::Invalid(other.to_string()),
        }
    }

    /// Check if this action is invalid.
    pub fn is_invalid(&self) -> bool {
        matches!(self, MenuAction::Invalid(_))
    }

    /// Get the menu key for this action.
    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::AddMessage => "1",
            MenuAction::DeleteMessage => "2",
            MenuAction::PrintAll => "3",
            MenuAction::Search => "4",
            MenuAction::PrintDigital => "5",
            MenuAction::PrintPreviews => "6",
            MenuAction::Exit => "7",
            MenuAction::Invalid(_) => "",
        }
    }
}

/// Kind of message chosen in the "add" sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddChoice {
    Board,
    Email,
    Reaction,
}

impl AddChoice {
    /// Map a 1-based sub-menu choice.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(AddChoice::Board),
            2 => Some(AddChoice::Email),
            3 => Some(AddChoice::Reaction),
            _ => None,
        }
    }
}
