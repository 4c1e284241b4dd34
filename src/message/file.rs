//! File attachment value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::message::header::require_text;
use crate::Result;

/// A named, typed file that can be attached to an email.
///
/// Equality ignores case on both fields jointly, so `Doc.pdf` and
/// `DOC.PDF` are the same attachment.
#[derive(Debug, Clone, Eq)]
pub struct File {
    name: String,
    file_type: String,
}

impl File {
    /// Create a file. Both fields must be non-blank; they are stored trimmed.
    pub fn new(name: &str, file_type: &str) -> Result<Self> {
        Ok(Self {
            name: require_text(name, "File name cannot be null or blank")?,
            file_type: require_text(file_type, "File type cannot be null or blank")?,
        })
    }

    /// Get the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file type.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Rename the file.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = require_text(name, "File name cannot be null or blank")?;
        Ok(())
    }

    /// Change the file type.
    pub fn set_file_type(&mut self, file_type: &str) -> Result<()> {
        self.file_type = require_text(file_type, "File type cannot be null or blank")?;
        Ok(())
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.file_type.to_lowercase() == other.file_type.to_lowercase()
    }
}

impl Hash for File {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
        self.file_type.to_lowercase().hash(state);
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File {{name='{}', type='{}'}}", self.name, self.file_type)
    }
}
