//! Common utilities for screen handlers.

use std::io::ErrorKind;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::catalog::MessageCatalog;
use crate::config::DisplayConfig;
use crate::error::{MsgcatError, Result};
use crate::message::Message;

/// Check whether an error only means the input stream is exhausted.
pub fn is_end_of_input(err: &MsgcatError) -> bool {
    matches!(err, MsgcatError::Io(e) if e.kind() == ErrorKind::UnexpectedEof)
}

/// Parse a trimmed number, `None` on anything else.
pub fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

/// Shared context for screen handlers.
pub struct ScreenContext<R, W> {
    reader: R,
    writer: W,
    /// The catalog the session works on.
    pub catalog: MessageCatalog,
    /// Date/time settings for message display.
    pub display: DisplayConfig,
}

impl<R, W> ScreenContext<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a new screen context.
    pub fn new(reader: R, writer: W, catalog: MessageCatalog, display: DisplayConfig) -> Self {
        Self {
            reader,
            writer,
            catalog,
            display,
        }
    }

    /// Give back the catalog and the writer once the session ends.
    pub fn into_parts(self) -> (MessageCatalog, W) {
        (self.catalog, self.writer)
    }

    /// Send text as-is (used for prompts).
    pub async fn send(&mut self, data: &str) -> Result<()> {
        self.writer.write_all(data.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send a line of text.
    pub async fn send_line(&mut self, data: &str) -> Result<()> {
        self.send(&format!("{data}\n")).await
    }

    /// Read one line of input without its line terminator.
    ///
    /// Returns an `UnexpectedEof` I/O error once input is exhausted.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(MsgcatError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Send a prompt and read the answer.
    pub async fn prompt(&mut self, text: &str) -> Result<String> {
        self.send(text).await?;
        self.read_line().await
    }

    /// Render a message with its type header.
    pub fn render_message(&self, message: &Message) -> String {
        format!(
            "Message Type: {}\n{}",
            message.kind(),
            message.describe(&self.display)
        )
    }

    /// Ask for sender and content until both are non-blank.
    pub async fn read_message_data(&mut self) -> Result<(String, String)> {
        self.send_line("#### GET MESSAGE DATA ####").await?;
        loop {
            let sender = self.prompt("Please enter the sender name: ").await?;
            if sender.trim().is_empty() {
                self.send_line("Sender name cannot be blank!\nPlease try again!")
                    .await?;
                continue;
            }
            let content = self.prompt("Please enter the message content: ").await?;
            if content.trim().is_empty() {
                self.send_line("Message content cannot be blank!\nPlease try again!")
                    .await?;
                continue;
            }
            return Ok((sender.trim().to_string(), content.trim().to_string()));
        }
    }
}
