//! Email messages.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::DisplayConfig;
use crate::message::digital::{Digital, EMAIL_SERVER};
use crate::message::file::File;
use crate::message::header::{require_text, HeaderDraft, MessageHeader};
use crate::message::id::IdAllocator;
use crate::{MsgcatError, Result};

const BLANK_SUBJECT: &str = "Subject cannot be null or blank";

/// An email with a subject and file attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    header: MessageHeader,
    subject: String,
    attachments: Vec<File>,
}

impl EmailMessage {
    /// Create an email without attachments.
    pub fn new(ids: &IdAllocator, sender: &str, content: &str, subject: &str) -> Result<Self> {
        NewEmailMessage::new(sender, content, subject).build(ids)
    }

    /// Get the common message fields.
    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    /// Get the subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Change the subject. Blank subjects are rejected.
    pub fn set_subject(&mut self, subject: &str) -> Result<()> {
        self.subject = require_text(subject, BLANK_SUBJECT)?;
        Ok(())
    }

    /// Attachments in the order they were added (duplicates allowed).
    pub fn attachments(&self) -> &[File] {
        &self.attachments
    }

    /// Replace the whole attachment list.
    pub fn set_attachments(&mut self, attachments: Vec<File>) {
        self.attachments = attachments;
    }

    /// Append an attachment.
    pub fn add_attachment(&mut self, file: File) {
        self.attachments.push(file);
    }

    /// Remove every attachment equal to `file` (case-insensitive).
    ///
    /// Fails with an attachment error when nothing matched.
    pub fn remove_attachment(&mut self, file: &File) -> Result<()> {
        let before = self.attachments.len();
        self.attachments.retain(|att| att != file);
        if self.attachments.len() == before {
            return Err(MsgcatError::Attachment(
                "Attachment does not exist!".to_string(),
            ));
        }
        Ok(())
    }

    /// `[Email] Subject: {subject} | From: {sender}`
    pub fn preview(&self) -> String {
        format!(
            "[Email] Subject: {} | From: {}",
            self.subject,
            self.header.sender()
        )
    }

    /// Render the full display block.
    pub fn describe(&self, display: &DisplayConfig) -> String {
        let mut out = format!(
            "subject:{}\n{}\n",
            self.subject,
            self.header.describe(display)
        );
        if self.attachments.is_empty() {
            out.push_str("Attachment List: None.\n");
        } else {
            out.push_str("Attachment List:\n");
            for file in &self.attachments {
                out.push_str(&format!("- {file}\n"));
            }
        }
        out
    }
}

impl Digital for EmailMessage {
    fn communication_method(&self) -> &'static str {
        EMAIL_SERVER
    }
}

impl fmt::Display for EmailMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&DisplayConfig::default()))
    }
}

/// Data for creating a new email message.
#[derive(Debug, Clone)]
pub struct NewEmailMessage {
    header: HeaderDraft,
    subject: String,
    attachments: Vec<File>,
}

impl NewEmailMessage {
    /// Start an email draft.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            header: HeaderDraft::new(sender, content),
            subject: subject.into(),
            attachments: Vec::new(),
        }
    }

    /// Set the initial attachments.
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = File>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Set explicit send date and time instead of "now".
    pub fn with_sent_at(mut self, send_date: DateTime<Utc>, send_time: DateTime<Utc>) -> Self {
        self.header.set_sent_at(send_date, send_time);
        self
    }

    /// Validate the draft and assign it an id.
    pub fn build(self, ids: &IdAllocator) -> Result<EmailMessage> {
        let header = self.header.validate()?;
        let subject = require_text(&self.subject, BLANK_SUBJECT)?;
        Ok(EmailMessage {
            header: header.assign_id(ids),
            subject,
            attachments: self.attachments,
        })
    }
}
