//! Board messages.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::DisplayConfig;
use crate::message::header::{truncate_preview, HeaderDraft, MessageHeader};
use crate::message::id::IdAllocator;
use crate::message::reaction::ReactionMessage;
use crate::message::types::Priority;
use crate::{MsgcatError, Result};

/// A board posting with a priority and the reactions it collected.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardMessage {
    header: MessageHeader,
    priority: Priority,
    reactions: Vec<ReactionMessage>,
}

impl BoardMessage {
    /// Create a board message with no reactions.
    pub fn new(ids: &IdAllocator, sender: &str, content: &str, priority: Priority) -> Result<Self> {
        NewBoardMessage::new(sender, content)
            .with_priority(priority)
            .build(ids)
    }

    /// Get the common message fields.
    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    /// Get the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Change the priority.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Reactions in the order they were added.
    ///
    /// The slice is read-only; `to_vec()` it to get an independent copy.
    pub fn reactions(&self) -> &[ReactionMessage] {
        &self.reactions
    }

    /// Replace the whole reaction list.
    pub fn set_reactions(&mut self, reactions: Vec<ReactionMessage>) {
        self.reactions = reactions;
    }

    /// Append a reaction.
    pub fn add_reaction(&mut self, reaction: ReactionMessage) {
        self.reactions.push(reaction);
    }

    /// `[Board] {sender}: {content}`
    pub fn preview(&self) -> String {
        format!(
            "[Board] {}: {}",
            self.header.sender(),
            truncate_preview(self.header.content())
        )
    }

    /// Render the full display block.
    pub fn describe(&self, display: &DisplayConfig) -> String {
        let mut out = format!(
            "Priority:{}\n{}\n",
            self.priority,
            self.header.describe(display)
        );
        if self.reactions.is_empty() {
            out.push_str("Reactions: No Reactions Found\n");
        } else {
            out.push_str("Reactions:\n");
            for reaction in &self.reactions {
                out.push_str(&format!("- {reaction}\n"));
            }
        }
        out
    }
}

impl fmt::Display for BoardMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&DisplayConfig::default()))
    }
}

/// Data for creating a new board message.
#[derive(Debug, Clone)]
pub struct NewBoardMessage {
    header: HeaderDraft,
    priority: Option<Priority>,
    reactions: Vec<ReactionMessage>,
}

impl NewBoardMessage {
    /// Start a board draft. The priority must be set before building.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: HeaderDraft::new(sender, content),
            priority: None,
            reactions: Vec::new(),
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the initial reactions.
    pub fn with_reactions(mut self, reactions: impl IntoIterator<Item = ReactionMessage>) -> Self {
        self.reactions = reactions.into_iter().collect();
        self
    }

    /// Set explicit send date and time instead of "now".
    pub fn with_sent_at(mut self, send_date: DateTime<Utc>, send_time: DateTime<Utc>) -> Self {
        self.header.set_sent_at(send_date, send_time);
        self
    }

    /// Validate the draft and assign it an id.
    pub fn build(self, ids: &IdAllocator) -> Result<BoardMessage> {
        let header = self.header.validate()?;
        let priority = self
            .priority
            .ok_or_else(|| MsgcatError::Validation("priority cannot be null".to_string()))?;
        Ok(BoardMessage {
            header: header.assign_id(ids),
            priority,
            reactions: self.reactions,
        })
    }
}
