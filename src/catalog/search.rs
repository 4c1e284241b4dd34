//! Keyword search over a catalog.

use std::fmt;

use crate::message::Message;

/// Search keywords, in the order the user gave them.
///
/// Blank tokens are dropped; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Build keywords from individual words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated line such as `"meeting, party"`.
    pub fn parse(line: &str) -> Self {
        Self::new(line.split(','))
    }

    /// Get the words.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Check if no usable word was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Messages matching a keyword search, in catalog order.
#[derive(Debug)]
pub struct SearchResult<'a> {
    /// The keywords that were searched for.
    pub keywords: Keywords,
    /// Matching messages.
    pub matches: Vec<&'a Message>,
}

impl SearchResult<'_> {
    /// Number of matching messages.
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}
