//! Reaction messages.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::message::header::{truncate_preview, HeaderDraft, MessageHeader};
use crate::message::id::IdAllocator;
use crate::message::types::ReactionType;
use crate::{MsgcatError, Result};

const MISSING_REACTION_TYPE: &str = "Reaction type cannot be null.";

/// A lightweight sentiment message.
///
/// Lives either standalone in a catalog or inside a board message's
/// reaction list; each instance carries its own id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionMessage {
    header: MessageHeader,
    reaction_type: ReactionType,
}

impl ReactionMessage {
    /// Create a reaction message.
    pub fn new(
        ids: &IdAllocator,
        sender: &str,
        content: &str,
        reaction_type: ReactionType,
    ) -> Result<Self> {
        NewReactionMessage::new(sender, content)
            .with_reaction_type(reaction_type)
            .build(ids)
    }

    /// Get the common message fields.
    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    /// Get the reaction type.
    pub fn reaction_type(&self) -> ReactionType {
        self.reaction_type
    }

    /// Change the reaction type.
    pub fn set_reaction_type(&mut self, reaction_type: ReactionType) {
        self.reaction_type = reaction_type;
    }

    /// `[Reaction] {sender}: {TYPE} - {content}`
    pub fn preview(&self) -> String {
        format!(
            "[Reaction] {}: {} - {}",
            self.header.sender(),
            self.reaction_type,
            truncate_preview(self.header.content())
        )
    }
}

impl fmt::Display for ReactionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reaction Message\nSender: {}\nReaction: {}\nContent: {}\n",
            self.header.sender(),
            self.reaction_type,
            self.header.content()
        )
    }
}

/// Data for creating a new reaction message.
#[derive(Debug, Clone)]
pub struct NewReactionMessage {
    header: HeaderDraft,
    reaction_type: Option<ReactionType>,
}

impl NewReactionMessage {
    /// Start a reaction draft. The reaction type must be set before building.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: HeaderDraft::new(sender, content),
            reaction_type: None,
        }
    }

    /// Set the reaction type.
    pub fn with_reaction_type(mut self, reaction_type: ReactionType) -> Self {
        self.reaction_type = Some(reaction_type);
        self
    }

    /// Set explicit send date and time instead of "now".
    pub fn with_sent_at(mut self, send_date: DateTime<Utc>, send_time: DateTime<Utc>) -> Self {
        self.header.set_sent_at(send_date, send_time);
        self
    }

    /// Validate the draft and assign it an id.
    ///
    /// Blank sender or content is a validation error; a missing reaction
    /// type is a reaction error. No id is consumed on failure.
    pub fn build(self, ids: &IdAllocator) -> Result<ReactionMessage> {
        let header = self.header.validate()?;
        let reaction_type = self
            .reaction_type
            .ok_or_else(|| MsgcatError::Reaction(MISSING_REACTION_TYPE.to_string()))?;
        Ok(ReactionMessage {
            header: header.assign_id(ids),
            reaction_type,
        })
    }
}
