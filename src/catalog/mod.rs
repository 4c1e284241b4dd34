//! Catalog module for msgcat.
//!
//! This module provides the in-memory message collection:
//! - Append and delete-by-id
//! - Filtering by variant or digital capability
//! - Keyword search and previews
//! - Attaching reactions to board messages

mod search;
mod seed;

pub use search::{Keywords, SearchResult};

use tracing::debug;

use crate::message::{BoardMessage, Capability, IdAllocator, Message, MessageId, ReactionMessage};
use crate::{MsgcatError, Result};

/// Ordered, in-memory collection of messages.
///
/// Insertion order is the display and search order. The catalog owns the
/// id allocator its messages are built from.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    ids: IdAllocator,
    messages: Vec<Message>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-seeded with the demo messages.
    pub fn with_defaults() -> Result<Self> {
        let mut catalog = Self::new();
        for message in seed::default_messages(&catalog.ids)? {
            catalog.add(message);
        }
        Ok(catalog)
    }

    /// The allocator new messages for this catalog should be built with.
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Append a message to the end.
    ///
    /// Ids are unique only among messages built with [`Self::ids`]; a
    /// message from another allocator may collide with an existing entry.
    pub fn add(&mut self, message: impl Into<Message>) {
        let message = message.into();
        debug_assert!(
            self.get(message.id()).is_none(),
            "duplicate message id {}",
            message.id()
        );
        debug!(id = %message.id(), kind = %message.kind(), "message added");
        self.messages.push(message);
    }

    /// Remove the message with the given id.
    ///
    /// Returns `false` (and leaves the catalog untouched) if no message has it.
    pub fn delete_by_id(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id() != id);
        let removed = self.messages.len() != before;
        debug!(%id, removed, "delete by id");
        removed
    }

    /// Look up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    /// Look up a board message by id for mutation.
    pub fn find_board_mut(&mut self, id: MessageId) -> Option<&mut BoardMessage> {
        self.messages
            .iter_mut()
            .filter_map(Message::as_board_mut)
            .find(|b| b.header().id() == id)
    }

    /// Attach a reaction to the board message with the given id.
    pub fn attach_reaction(&mut self, board_id: MessageId, reaction: ReactionMessage) -> Result<()> {
        let board = self
            .find_board_mut(board_id)
            .ok_or_else(|| MsgcatError::NotFound(format!("board message {board_id}")))?;
        debug!(board = %board_id, reaction = %reaction.header().id(), "reaction attached");
        board.add_reaction(reaction);
        Ok(())
    }

    /// Check if the catalog holds at least one board message.
    pub fn has_boards(&self) -> bool {
        self.boards().next().is_some()
    }

    /// Board messages in catalog order.
    pub fn boards(&self) -> impl Iterator<Item = &Message> {
        self.filter(Capability::Board)
    }

    /// Messages selected by `capability`, in catalog order.
    pub fn filter(&self, capability: Capability) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(move |m| m.has_capability(capability))
    }

    /// Messages whose content matches any of the keywords.
    pub fn search(&self, keywords: &Keywords) -> SearchResult<'_> {
        let matches = self
            .messages
            .iter()
            .filter(|m| m.find(keywords.as_slice()))
            .collect();
        SearchResult {
            keywords: keywords.clone(),
            matches,
        }
    }

    /// One preview line per message, in catalog order.
    pub fn previews(&self) -> impl Iterator<Item = String> + '_ {
        self.messages.iter().map(Message::preview)
    }

    /// All messages in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{EmailMessage, MessageKind, Priority, ReactionType};

    fn mixed_catalog() -> MessageCatalog {
        let mut catalog = MessageCatalog::new();
        let board = BoardMessage::new(catalog.ids(), "Alice", "Meeting at 10 AM", Priority::Urgent)
            .unwrap();
        let email =
            EmailMessage::new(catalog.ids(), "Sam", "Picture of the meeting room", "Room").unwrap();
        let reaction =
            ReactionMessage::new(catalog.ids(), "Lili", "Love this idea!", ReactionType::Love)
                .unwrap();
        catalog.add(board);
        catalog.add(email);
        catalog.add(reaction);
        catalog
    }

    #[test]
    fn test_add_preserves_order() {
        let catalog = mixed_catalog();
        let kinds: Vec<_> = catalog.iter().map(Message::kind).collect();
        assert_eq!(
            kinds,
            vec![MessageKind::Board, MessageKind::Email, MessageKind::Reaction]
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_delete_by_id() {
        let mut catalog = mixed_catalog();
        assert!(catalog.delete_by_id(MessageId::from(2)));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(MessageId::from(2)).is_none());
        assert!(!catalog.delete_by_id(MessageId::from(2)));
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut catalog = mixed_catalog();
        assert!(!catalog.delete_by_id(MessageId::from(99)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_filter_digital_returns_only_email() {
        let catalog = mixed_catalog();
        let digital: Vec<_> = catalog.filter(Capability::Digital).collect();
        assert_eq!(digital.len(), 1);
        assert_eq!(digital[0].kind(), MessageKind::Email);
    }

    #[test]
    fn test_filter_by_variant() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.filter(Capability::Board).count(), 1);
        assert_eq!(catalog.filter(Capability::Reaction).count(), 1);
        assert!(catalog.has_boards());
        assert!(!MessageCatalog::new().has_boards());
    }

    #[test]
    fn test_search_counts_matches() {
        let catalog = mixed_catalog();
        let result = catalog.search(&Keywords::parse("MEETING"));
        assert_eq!(result.count(), 2);
        assert_eq!(result.matches[0].id(), MessageId::from(1));

        assert_eq!(catalog.search(&Keywords::parse("xyz")).count(), 0);
        assert_eq!(catalog.search(&Keywords::default()).count(), 0);
    }

    #[test]
    fn test_previews_in_order() {
        let catalog = mixed_catalog();
        let previews: Vec<_> = catalog.previews().collect();
        assert_eq!(previews[0], "[Board] Alice: Meeting at 10 A...");
        assert_eq!(previews[1], "[Email] Subject: Room | From: Sam");
        assert_eq!(previews[2], "[Reaction] Lili: LOVE - Love this idea!");
    }

    #[test]
    fn test_attach_reaction() {
        let mut catalog = mixed_catalog();
        let reaction =
            ReactionMessage::new(catalog.ids(), "Bob", "On my way", ReactionType::Like).unwrap();
        catalog.attach_reaction(MessageId::from(1), reaction).unwrap();

        let board = catalog.get(MessageId::from(1)).unwrap().as_board().unwrap();
        assert_eq!(board.reactions().len(), 1);
        assert_eq!(board.reactions()[0].header().id(), MessageId::from(4));
    }

    #[test]
    fn test_attach_reaction_to_non_board() {
        let mut catalog = mixed_catalog();
        let reaction =
            ReactionMessage::new(catalog.ids(), "Bob", "Hi", ReactionType::Like).unwrap();
        let err = catalog.attach_reaction(MessageId::from(2), reaction).unwrap_err();
        assert!(matches!(err, MsgcatError::NotFound(_)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate message id")]
    fn test_add_foreign_duplicate_id() {
        let mut catalog = mixed_catalog();
        let other = IdAllocator::new();
        let board = BoardMessage::new(&other, "Eve", "Same id", Priority::Regular).unwrap();
        catalog.add(board);
    }

    #[test]
    fn test_with_defaults() {
        let catalog = MessageCatalog::with_defaults().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.filter(Capability::Board).count(), 3);
        assert_eq!(catalog.filter(Capability::Digital).count(), 2);
        assert_eq!(catalog.filter(Capability::Reaction).count(), 2);
        // two attached reactions consumed ids as well
        assert_eq!(catalog.ids().peek(), MessageId::from(10));
    }
}
