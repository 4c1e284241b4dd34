//! Enumerations shared by the message variants.

use std::fmt;
use std::str::FromStr;

/// Urgency of a board message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Needs attention now.
    Urgent,
    /// Ordinary posting.
    Regular,
    /// Special occasion.
    Special,
}

impl Priority {
    /// All priorities in menu order.
    pub const ALL: [Priority; 3] = [Priority::Urgent, Priority::Regular, Priority::Special];

    /// Upper-case name used in display and previews.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "URGENT",
            Priority::Regular => "REGULAR",
            Priority::Special => "SPECIAL",
        }
    }

    /// Map a 1-based menu choice to a priority.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Priority::Urgent),
            2 => Some(Priority::Regular),
            3 => Some(Priority::Special),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "regular" => Ok(Priority::Regular),
            "special" => Ok(Priority::Special),
            _ => Err(format!("unknown priority: {s}")),
        }
    }
}

/// Sentiment carried by a reaction message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    Like,
    Dislike,
    Laugh,
    Love,
}

impl ReactionType {
    /// All reaction types in menu order.
    pub const ALL: [ReactionType; 4] = [
        ReactionType::Like,
        ReactionType::Dislike,
        ReactionType::Laugh,
        ReactionType::Love,
    ];

    /// Upper-case name used in display and previews.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Like => "LIKE",
            ReactionType::Dislike => "DISLIKE",
            ReactionType::Laugh => "LAUGH",
            ReactionType::Love => "LOVE",
        }
    }

    /// Map a 1-based menu choice to a reaction type.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(ReactionType::Like),
            2 => Some(ReactionType::Dislike),
            3 => Some(ReactionType::Laugh),
            4 => Some(ReactionType::Love),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(ReactionType::Like),
            "dislike" => Ok(ReactionType::Dislike),
            "laugh" => Ok(ReactionType::Laugh),
            "love" => Ok(ReactionType::Love),
            _ => Err(format!("unknown reaction type: {s}")),
        }
    }
}
