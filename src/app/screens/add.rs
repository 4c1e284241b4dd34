//! Screens for adding board, email and reaction messages.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use super::common::{parse_number, ScreenContext};
use super::listing::ListingScreen;
use crate::app::menu::{AddChoice, ADD_MENU};
use crate::error::Result;
use crate::message::{
    BoardMessage, EmailMessage, File, MessageId, Priority, ReactionMessage, ReactionType,
};

/// Add message screen handler.
pub struct AddScreen;

impl AddScreen {
    /// Run the "add new message" sub-menu.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let choice = loop {
            let input = ctx.prompt(ADD_MENU).await?;
            match parse_number::<u8>(&input) {
                Some(n) => match AddChoice::from_choice(n) {
                    Some(choice) => break choice,
                    None => {
                        ctx.send_line("Choice must be between 1-3!\nPlease try again.")
                            .await?
                    }
                },
                None => {
                    ctx.send_line("Invalid input! Please enter a number between 1-3.")
                        .await?
                }
            }
        };

        match choice {
            AddChoice::Board => Self::add_board(ctx).await,
            AddChoice::Email => Self::add_email(ctx).await,
            AddChoice::Reaction => Self::add_reaction(ctx).await,
        }
    }

    /// Collect a board message and append it to the catalog.
    async fn add_board<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("####  ADD BOARD MESSAGE  ####").await?;
        let (sender, content) = ctx.read_message_data().await?;

        let board = loop {
            let input = ctx
                .prompt("Priority:\n(1) Urgent\n(2) Regular\n(3) Special\nPlease enter the priority: ")
                .await?;
            let Some(n) = parse_number::<u8>(&input) else {
                ctx.send_line("Invalid input! Please enter a number between 1-3.")
                    .await?;
                continue;
            };
            let Some(priority) = Priority::from_choice(n) else {
                ctx.send_line("Choice must be between 1-3!\nPlease try again.")
                    .await?;
                continue;
            };
            match BoardMessage::new(ctx.catalog.ids(), &sender, &content, priority) {
                Ok(board) => break board,
                Err(e) => {
                    ctx.send_line(&format!("{}\nPlease try again.", e.detail()))
                        .await?
                }
            }
        };

        let id = board.header().id();
        ctx.catalog.add(board);
        info!(%id, "board message created");
        ctx.send_line(&format!("Message added successfully. (Id {id})"))
            .await
    }

    /// Collect an email with optional attachments and append it to the catalog.
    async fn add_email<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("####  ADD EMAIL MESSAGE  ####").await?;
        let (sender, content) = ctx.read_message_data().await?;

        let mut email = loop {
            let subject = ctx.prompt("Please enter a subject: ").await?;
            match EmailMessage::new(ctx.catalog.ids(), &sender, &content, &subject) {
                Ok(email) => break email,
                Err(e) => {
                    ctx.send_line(&format!("{}\nPlease try again!", e.detail()))
                        .await?
                }
            }
        };

        loop {
            let input = ctx
                .prompt("Would you like to add attachments?:\n(1) Yes\n(2) No\nPlease enter your choice: ")
                .await?;
            match parse_number::<u8>(&input) {
                Some(1) => {
                    let input = ctx.prompt("How many attachments? ").await?;
                    let Some(count) = parse_number::<i64>(&input) else {
                        ctx.send_line("Invalid input! Try again!").await?;
                        continue;
                    };
                    if count < 1 {
                        ctx.send_line("Number of attachments must be positive!\nPlease try again!")
                            .await?;
                        continue;
                    }
                    for _ in 0..count {
                        let file = Self::read_file(ctx).await?;
                        email.add_attachment(file);
                    }
                    break;
                }
                Some(2) => break,
                Some(_) => {
                    ctx.send_line("Choice must be between 1-2!\nPlease try again!")
                        .await?
                }
                None => ctx.send_line("Invalid input! Try again!").await?,
            }
        }

        let id = email.header().id();
        let attachments = email.attachments().len();
        ctx.catalog.add(email);
        info!(%id, attachments, "email message created");
        ctx.send_line(&format!("Message added successfully. (Id {id})"))
            .await
    }

    /// Ask for a file name and type until they form a valid attachment.
    async fn read_file<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<File>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### ADD FILE TO EMAIL ####").await?;
        loop {
            let name = ctx.prompt("Enter File name: ").await?;
            let file_type = ctx.prompt("Enter File Type: ").await?;
            match File::new(&name, &file_type) {
                Ok(file) => return Ok(file),
                Err(e) => {
                    ctx.send_line(&format!("{}\nPlease try again!", e.detail()))
                        .await?
                }
            }
        }
    }

    /// Build a reaction and attach it to an existing board message.
    async fn add_reaction<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_line("#### ADD REACTION MESSAGE ####").await?;
        if !ctx.catalog.has_boards() {
            return ctx
                .send_line("There are no board messages to react on.")
                .await;
        }

        ListingScreen::print_boards(ctx).await?;

        let board_id = loop {
            let input = ctx
                .prompt("Please enter the message Id you want to react on (or 'L' to list again): ")
                .await?;
            let input = input.trim();
            if input.eq_ignore_ascii_case("L") {
                ListingScreen::print_boards(ctx).await?;
                continue;
            }
            let Some(raw) = parse_number::<u64>(input) else {
                ctx.send_line("Invalid input! Please enter a numeric Id.")
                    .await?;
                continue;
            };
            let id = MessageId::from(raw);
            if ctx.catalog.find_board_mut(id).is_some() {
                break id;
            }
            ctx.send_line(&format!(
                "No board message found with Id {id}. Please try again."
            ))
            .await?;
        };

        let (sender, content) = ctx.read_message_data().await?;

        let reaction_type = loop {
            let input = ctx
                .prompt("Enter reaction type (1: LIKE, 2: DISLIKE, 3: LAUGH, 4: LOVE): ")
                .await?;
            match parse_number::<u8>(&input) {
                Some(n) => match ReactionType::from_choice(n) {
                    Some(reaction_type) => break reaction_type,
                    None => ctx.send_line("Choice must be between 1-4!").await?,
                },
                None => ctx.send_line("Invalid input! Please enter 1-4.").await?,
            }
        };

        let attached = ReactionMessage::new(ctx.catalog.ids(), &sender, &content, reaction_type)
            .and_then(|reaction| ctx.catalog.attach_reaction(board_id, reaction));
        match attached {
            Ok(()) => {
                info!(board = %board_id, "reaction attached");
                ctx.send_line("Reaction added successfully.").await
            }
            Err(e) => {
                ctx.send_line(&format!("{}\nPlease try again!", e.detail()))
                    .await
            }
        }
    }
}
