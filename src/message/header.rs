//! Fields and behavior common to every message variant.

use chrono::{DateTime, Utc};

use crate::config::DisplayConfig;
use crate::datetime::format_utc_datetime;
use crate::message::id::{IdAllocator, MessageId};
use crate::{MsgcatError, Result};

/// Number of content characters shown in a preview.
pub const PREVIEW_LENGTH: usize = 15;

/// Reject blank text, otherwise return it trimmed.
pub(crate) fn require_text(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MsgcatError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Shorten content for a preview line.
///
/// Content longer than [`PREVIEW_LENGTH`] characters is cut, trimmed and
/// suffixed with `...`.
pub(crate) fn truncate_preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LENGTH {
        let head: String = text.chars().take(PREVIEW_LENGTH).collect();
        format!("{}...", head.trim())
    } else {
        text.to_string()
    }
}

/// Common record shared by board, email and reaction messages.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageHeader {
    id: MessageId,
    sender: String,
    content: String,
    send_date: DateTime<Utc>,
    send_time: DateTime<Utc>,
}

impl MessageHeader {
    /// Get the message ID.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Get the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Get the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the send date.
    pub fn send_date(&self) -> DateTime<Utc> {
        self.send_date
    }

    /// Get the send time.
    pub fn send_time(&self) -> DateTime<Utc> {
        self.send_time
    }

    /// Check whether the content contains any of the keywords.
    ///
    /// Matching is a case-insensitive substring test on the keyword as
    /// given, surrounding spaces included. Blank keywords are ignored, and
    /// an empty keyword list never matches.
    pub fn find<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let text = self.content.to_lowercase();
        keywords.iter().any(|word| {
            let word = word.as_ref();
            !word.trim().is_empty() && text.contains(&word.to_lowercase())
        })
    }

    /// Render the base display block (no trailing newline).
    pub fn describe(&self, display: &DisplayConfig) -> String {
        format!(
            "Message ID: {}\nSender: {}\nContent: {}\nDate: {}\nTime: {}",
            self.id,
            self.sender,
            self.content,
            format_utc_datetime(&self.send_date, &display.timezone, &display.date_format),
            format_utc_datetime(&self.send_time, &display.timezone, &display.time_format),
        )
    }
}

/// Unvalidated common fields collected by a message draft.
#[derive(Debug, Clone)]
pub(crate) struct HeaderDraft {
    sender: String,
    content: String,
    send_date: Option<DateTime<Utc>>,
    send_time: Option<DateTime<Utc>>,
}

impl HeaderDraft {
    pub(crate) fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            send_date: None,
            send_time: None,
        }
    }

    pub(crate) fn set_sent_at(&mut self, send_date: DateTime<Utc>, send_time: DateTime<Utc>) {
        self.send_date = Some(send_date);
        self.send_time = Some(send_time);
    }

    /// Check sender and content without touching the allocator.
    pub(crate) fn validate(&self) -> Result<ValidHeader> {
        let sender = require_text(&self.sender, "Senders name cannot be empty")?;
        let content = require_text(&self.content, "Message content cannot be empty")?;
        let now = Utc::now();
        Ok(ValidHeader {
            sender,
            content,
            send_date: self.send_date.unwrap_or(now),
            send_time: self.send_time.unwrap_or(now),
        })
    }
}

/// Common fields that passed validation but have no id yet.
#[derive(Debug)]
pub(crate) struct ValidHeader {
    sender: String,
    content: String,
    send_date: DateTime<Utc>,
    send_time: DateTime<Utc>,
}

impl ValidHeader {
    /// Consume one id. Call only once every variant check has passed.
    pub(crate) fn assign_id(self, ids: &IdAllocator) -> MessageHeader {
        MessageHeader {
            id: ids.next_id(),
            sender: self.sender,
            content: self.content,
            send_date: self.send_date,
            send_time: self.send_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn header(content: &str) -> MessageHeader {
        let ids = IdAllocator::new();
        HeaderDraft::new("Alice", content)
            .validate()
            .unwrap()
            .assign_id(&ids)
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  hi ", "x").unwrap(), "hi");
        assert!(require_text(" \t\n", "x").unwrap_err().is_validation());
    }

    #[test]
    fn test_truncate_preview_short() {
        assert_eq!(truncate_preview("Meeting at 10 AM"), "Meeting at 10 A...");
        assert_eq!(truncate_preview("Love this idea!"), "Love this idea!");
        assert_eq!(truncate_preview(""), "");
    }

    #[test]
    fn test_truncate_preview_trims_cut() {
        assert_eq!(
            truncate_preview("Weekly report submission deadline"),
            "Weekly report s..."
        );
        // 15th char is a space
        assert_eq!(truncate_preview("Birthday party on Sunday."), "Birthday party...");
    }

    #[test]
    fn test_truncate_preview_counts_chars() {
        let text = "ééééééééééééééééé";
        assert_eq!(truncate_preview(text), format!("{}...", "é".repeat(15)));
    }

    #[test]
    fn test_validate_trims_and_rejects() {
        let ids = IdAllocator::new();
        let h = HeaderDraft::new("  Bob ", " hello ")
            .validate()
            .unwrap()
            .assign_id(&ids);
        assert_eq!(h.sender(), "Bob");
        assert_eq!(h.content(), "hello");

        let err = HeaderDraft::new(" ", "hello").validate().unwrap_err();
        assert_eq!(err.detail(), "Senders name cannot be empty");
        let err = HeaderDraft::new("Bob", "").validate().unwrap_err();
        assert_eq!(err.detail(), "Message content cannot be empty");
    }

    #[test]
    fn test_find() {
        let h = header("Meeting at 10 AM");
        assert!(h.find(&["Meeting"]));
        assert!(h.find(&["meeting"]));
        assert!(h.find(&["xyz", "10 am"]));
        assert!(!h.find(&["xyz"]));
        assert!(!h.find(&["", "   "]));
        let none: [&str; 0] = [];
        assert!(!h.find(&none));
    }

    #[test]
    fn test_find_keeps_keyword_spaces() {
        let h = header("Meeting at10");
        assert!(!h.find(&[" 10"]));
        assert!(h.find(&["at10"]));
        assert!(h.find(&[" AT10"]));
        assert!(header("Meeting at 10").find(&[" 10"]));
    }

    #[test]
    fn test_explicit_send_time() {
        let ids = IdAllocator::new();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        let mut draft = HeaderDraft::new("Alice", "Hi");
        draft.set_sent_at(at, at);
        let h = draft.validate().unwrap().assign_id(&ids);
        assert_eq!(h.send_date(), at);
        assert_eq!(
            h.describe(&DisplayConfig::default()),
            "Message ID: 1\nSender: Alice\nContent: Hi\nDate: 2024-03-01\nTime: 08:15:00"
        );
    }
}
