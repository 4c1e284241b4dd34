//! Error types for msgcat.

use thiserror::Error;

/// Common error type for msgcat.
#[derive(Error, Debug)]
pub enum MsgcatError {
    /// A required field is missing, blank or otherwise invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// A reaction was built or mutated without a reaction type.
    #[error("reaction error: {0}")]
    Reaction(String),

    /// An attachment could not be removed from an email.
    #[error("attachment error: {0}")]
    Attachment(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MsgcatError {
    /// Check if this is a generic validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, MsgcatError::Validation(_))
    }

    /// Check if this is a reaction-specific failure.
    pub fn is_reaction(&self) -> bool {
        matches!(self, MsgcatError::Reaction(_))
    }

    /// Check if this is an attachment-specific failure.
    pub fn is_attachment(&self) -> bool {
        matches!(self, MsgcatError::Attachment(_))
    }

    /// The bare detail message, without the category prefix.
    ///
    /// The menu shows this to the user, the same way it was raised.
    pub fn detail(&self) -> String {
        match self {
            MsgcatError::Validation(msg)
            | MsgcatError::Reaction(msg)
            | MsgcatError::Attachment(msg)
            | MsgcatError::Config(msg) => msg.clone(),
            MsgcatError::NotFound(what) => format!("{what} not found"),
            MsgcatError::Io(e) => e.to_string(),
        }
    }
}

/// Result type alias for msgcat operations.
pub type Result<T> = std::result::Result<T, MsgcatError>;
