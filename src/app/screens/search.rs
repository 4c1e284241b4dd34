//! Keyword search screen.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use super::common::ScreenContext;
use crate::catalog::Keywords;
use crate::error::Result;

/// Search screen handler.
pub struct SearchScreen;

impl SearchScreen {
    /// Count messages whose content contains any of the entered words.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### SEARCH MESSAGES BY WORDS ####").await?;
        let line = ctx.prompt("Enter word(s) (comma separated): ").await?;
        let keywords = Keywords::parse(&line);
        if keywords.is_empty() {
            return ctx.send_line("No valid words provided.").await;
        }

        let count = ctx.catalog.search(&keywords).count();
        debug!(%keywords, count, "search");
        ctx.send_line(&format!(
            "Number of messages containing any of {keywords}: {count}"
        ))
        .await
    }
}
