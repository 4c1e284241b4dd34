//! msgcat - in-memory message catalog
//!
//! Board postings, emails and reactions kept in one ordered catalog,
//! driven by a plain text menu.

pub mod app;
pub mod catalog;
pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod message;

pub use app::{Application, MenuAction, ScreenResult};
pub use catalog::{Keywords, MessageCatalog, SearchResult};
pub use config::Config;
pub use error::{MsgcatError, Result};
pub use message::{
    BoardMessage, Capability, Digital, EmailMessage, File, IdAllocator, Message, MessageHeader,
    MessageId, MessageKind, NewBoardMessage, NewEmailMessage, NewReactionMessage, Priority,
    ReactionMessage, ReactionType,
};
