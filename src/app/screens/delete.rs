//! Delete message screen.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use super::common::{parse_number, ScreenContext};
use super::listing::ListingScreen;
use crate::error::Result;
use crate::message::MessageId;

/// Delete screen handler.
pub struct DeleteScreen;

impl DeleteScreen {
    /// List all messages and delete one by id.
    ///
    /// Keeps asking until an id actually removes a message.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### DELETE MESSAGE ####").await?;
        if ctx.catalog.is_empty() {
            return ctx.send_line("No messages to delete.").await;
        }
        ListingScreen::print_all(ctx).await?;

        loop {
            let input = ctx
                .prompt("Please enter the message Id you want to delete: ")
                .await?;
            let Some(raw) = parse_number::<u64>(&input) else {
                ctx.send_line("Invalid input! Please enter a valid numeric Id.")
                    .await?;
                continue;
            };
            let id = MessageId::from(raw);
            if ctx.catalog.delete_by_id(id) {
                info!(%id, "message deleted");
                return ctx.send_line("Message deleted successfully.").await;
            }
            ctx.send_line("Invalid message Id. Please try again.")
                .await?;
        }
    }
}
