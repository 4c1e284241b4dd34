//! Screens that print catalog contents.

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::common::ScreenContext;
use crate::error::Result;
use crate::message::Capability;

const NOTHING_TO_DISPLAY: &str = "No messages to display.";

/// Listing screen handler.
pub struct ListingScreen;

impl ListingScreen {
    /// Print every message with its full display block.
    pub async fn print_all<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### PRINT ALL MESSAGES ####").await?;
        if ctx.catalog.is_empty() {
            return ctx.send_line(NOTHING_TO_DISPLAY).await;
        }
        let blocks: Vec<String> = ctx.catalog.iter().map(|m| ctx.render_message(m)).collect();
        Self::send_all(ctx, &blocks).await
    }

    /// Print board messages only.
    pub async fn print_boards<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### PRINT BOARD MESSAGES ####").await?;
        if ctx.catalog.is_empty() {
            return ctx.send_line(NOTHING_TO_DISPLAY).await;
        }
        let blocks: Vec<String> = ctx.catalog.boards().map(|m| ctx.render_message(m)).collect();
        Self::send_all(ctx, &blocks).await
    }

    /// Print messages with a digital transport, followed by the transport line.
    pub async fn print_digital<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### PRINT DIGITAL MESSAGES ####").await?;
        if ctx.catalog.is_empty() {
            return ctx.send_line(NOTHING_TO_DISPLAY).await;
        }
        let blocks: Vec<String> = ctx
            .catalog
            .filter(Capability::Digital)
            .filter_map(|m| {
                let digital = m.as_digital()?;
                Some(format!(
                    "{}{}",
                    ctx.render_message(m),
                    digital.communication_method()
                ))
            })
            .collect();
        Self::send_all(ctx, &blocks).await
    }

    /// Print one preview line per message.
    pub async fn print_previews<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### PRINT PREVIEWS ####").await?;
        if ctx.catalog.is_empty() {
            return ctx.send_line(NOTHING_TO_DISPLAY).await;
        }
        let previews: Vec<String> = ctx.catalog.previews().collect();
        Self::send_all(ctx, &previews).await
    }

    async fn send_all<R, W>(ctx: &mut ScreenContext<R, W>, lines: &[String]) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        for line in lines {
            ctx.send_line(line).await?;
        }
        Ok(())
    }
}
