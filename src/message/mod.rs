//! Message module for msgcat.
//!
//! This module provides the message taxonomy:
//! - Board messages with a priority and attached reactions
//! - Email messages with a subject and file attachments (digital capability)
//! - Standalone reaction messages
//! - Identity allocation shared by all of them

mod board;
mod digital;
mod email;
mod file;
mod header;
mod id;
mod reaction;
mod types;

use std::fmt;

pub use board::{BoardMessage, NewBoardMessage};
pub use digital::{Digital, EMAIL_SERVER};
pub use email::{EmailMessage, NewEmailMessage};
pub use file::File;
pub use header::{MessageHeader, PREVIEW_LENGTH};
pub use id::{IdAllocator, MessageId};
pub use reaction::{NewReactionMessage, ReactionMessage};
pub use types::{Priority, ReactionType};

use crate::config::DisplayConfig;

/// Runtime variant of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Board,
    Email,
    Reaction,
}

impl MessageKind {
    /// Name shown in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Board => "Board",
            MessageKind::Email => "Email",
            MessageKind::Reaction => "Reaction",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selector used to filter a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Board messages only.
    Board,
    /// Email messages only.
    Email,
    /// Reaction messages only.
    Reaction,
    /// Any message exposing a digital transport.
    Digital,
}

/// A message of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Board(BoardMessage),
    Email(EmailMessage),
    Reaction(ReactionMessage),
}

impl Message {
    /// Get the common message fields.
    pub fn header(&self) -> &MessageHeader {
        match self {
            Message::Board(m) => m.header(),
            Message::Email(m) => m.header(),
            Message::Reaction(m) => m.header(),
        }
    }

    /// Get the message ID.
    pub fn id(&self) -> MessageId {
        self.header().id()
    }

    /// Get the sender name.
    pub fn sender(&self) -> &str {
        self.header().sender()
    }

    /// Get the message content.
    pub fn content(&self) -> &str {
        self.header().content()
    }

    /// Get the runtime variant.
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Board(_) => MessageKind::Board,
            Message::Email(_) => MessageKind::Email,
            Message::Reaction(_) => MessageKind::Reaction,
        }
    }

    /// Check whether the content contains any of the keywords.
    pub fn find<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        self.header().find(keywords)
    }

    /// One-line summary in the variant's preview format.
    pub fn preview(&self) -> String {
        match self {
            Message::Board(m) => m.preview(),
            Message::Email(m) => m.preview(),
            Message::Reaction(m) => m.preview(),
        }
    }

    /// The digital capability, if this variant has one.
    pub fn as_digital(&self) -> Option<&dyn Digital> {
        match self {
            Message::Email(m) => Some(m),
            Message::Board(_) | Message::Reaction(_) => None,
        }
    }

    /// Check whether this message is selected by `capability`.
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::Board => self.kind() == MessageKind::Board,
            Capability::Email => self.kind() == MessageKind::Email,
            Capability::Reaction => self.kind() == MessageKind::Reaction,
            Capability::Digital => self.as_digital().is_some(),
        }
    }

    /// Get the board message, if this is one.
    pub fn as_board(&self) -> Option<&BoardMessage> {
        match self {
            Message::Board(m) => Some(m),
            _ => None,
        }
    }

    /// Get the board message mutably, if this is one.
    pub fn as_board_mut(&mut self) -> Option<&mut BoardMessage> {
        match self {
            Message::Board(m) => Some(m),
            _ => None,
        }
    }

    /// Get the email message, if this is one.
    pub fn as_email(&self) -> Option<&EmailMessage> {
        match self {
            Message::Email(m) => Some(m),
            _ => None,
        }
    }

    /// Render the full display block with the given date/time settings.
    pub fn describe(&self, display: &DisplayConfig) -> String {
        match self {
            Message::Board(m) => m.describe(display),
            Message::Email(m) => m.describe(display),
            Message::Reaction(m) => m.to_string(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&DisplayConfig::default()))
    }
}

impl From<BoardMessage> for Message {
    fn from(m: BoardMessage) -> Self {
        Message::Board(m)
    }
}

impl From<EmailMessage> for Message {
    fn from(m: EmailMessage) -> Self {
        Message::Email(m)
    }
}

impl From<ReactionMessage> for Message {
    fn from(m: ReactionMessage) -> Self {
        Message::Reaction(m)
    }
}
