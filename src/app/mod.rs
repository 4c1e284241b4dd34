//! Application module.
//!
//! Provides the main menu loop driving the catalog screens.

mod menu;
pub mod screens;

pub use menu::{AddChoice, MenuAction, ADD_MENU, MAIN_MENU};
pub use screens::ScreenResult;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use self::screens::{
    is_end_of_input, AddScreen, DeleteScreen, ListingScreen, ScreenContext, SearchScreen,
};
use crate::catalog::MessageCatalog;
use crate::config::Config;
use crate::Result;

/// Main application.
#[derive(Debug, Clone, Default)]
pub struct Application {
    config: Config,
}

impl Application {
    /// Create a new application.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create the catalog a session starts with.
    pub fn build_catalog(&self) -> Result<MessageCatalog> {
        if self.config.catalog.seed_defaults {
            let catalog = MessageCatalog::with_defaults()?;
            info!(messages = catalog.len(), "catalog seeded with demo messages");
            Ok(catalog)
        } else {
            Ok(MessageCatalog::new())
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Returns the catalog as the session left it.
    pub async fn run<R, W>(&self, catalog: MessageCatalog, reader: R, writer: W) -> Result<MessageCatalog>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut ctx = ScreenContext::new(reader, writer, catalog, self.config.display.clone());

        loop {
            match Self::handle_main_menu(&mut ctx).await {
                Ok(ScreenResult::Continue) => {}
                Ok(ScreenResult::Quit) => break,
                Err(e) if is_end_of_input(&e) => {
                    info!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let (catalog, _) = ctx.into_parts();
        Ok(catalog)
    }

    /// Show the main menu and run the chosen action.
    async fn handle_main_menu<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<ScreenResult>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut action = MenuAction::parse(&ctx.prompt(MAIN_MENU).await?);
        while action.is_invalid() {
            let input = ctx
                .prompt("Choice must be between 1-7!\nPlease try again: ")
                .await?;
            action = MenuAction::parse(&input);
        }
        debug!(key = action.key(), "menu action");

        match action {
            MenuAction::AddMessage => AddScreen::run(ctx).await?,
            MenuAction::DeleteMessage => DeleteScreen::run(ctx).await?,
            MenuAction::PrintAll => ListingScreen::print_all(ctx).await?,
            MenuAction::Search => SearchScreen::run(ctx).await?,
            MenuAction::PrintDigital => ListingScreen::print_digital(ctx).await?,
            MenuAction::PrintPreviews => ListingScreen::print_previews(ctx).await?,
            MenuAction::Exit => {
                ctx.send_line("Exiting program...").await?;
                return Ok(ScreenResult::Quit);
            }
            MenuAction::Invalid(_) => {}
        }

        Ok(ScreenResult::Continue)
    }
}
