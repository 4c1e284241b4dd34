//! Catalog and message model tests for msgcat.
//!
//! Exercises the public library API without the menu.

mod common;

use common::fixed_time;
use msgcat::config::DisplayConfig;
use msgcat::{
    BoardMessage, Capability, EmailMessage, File, IdAllocator, Keywords, Message,
    MessageCatalog, MessageId, MessageKind, NewBoardMessage, NewEmailMessage,
    NewReactionMessage, Priority, ReactionMessage, ReactionType,
};

#[test]
fn test_ids_are_sequential_across_kinds() {
    let ids = IdAllocator::new();
    let board = BoardMessage::new(&ids, "Alice", "Hello", Priority::Regular).unwrap();
    let email = EmailMessage::new(&ids, "Bob", "Hi", "Greetings").unwrap();
    let reaction = ReactionMessage::new(&ids, "Carol", "Nice", ReactionType::Like).unwrap();

    assert_eq!(board.header().id(), MessageId::from(1));
    assert_eq!(email.header().id(), MessageId::from(2));
    assert_eq!(reaction.header().id(), MessageId::from(3));
}

#[test]
fn test_failed_construction_does_not_consume_id() {
    let ids = IdAllocator::new();
    assert!(BoardMessage::new(&ids, "   ", "Hello", Priority::Urgent)
        .unwrap_err()
        .is_validation());
    assert!(EmailMessage::new(&ids, "Bob", "Hi", " ")
        .unwrap_err()
        .is_validation());
    assert!(NewReactionMessage::new("Carol", "Nice")
        .build(&ids)
        .unwrap_err()
        .is_reaction());
    assert!(NewBoardMessage::new("Dan", "Hey")
        .build(&ids)
        .unwrap_err()
        .is_validation());

    let board = BoardMessage::new(&ids, "Alice", "Hello", Priority::Urgent).unwrap();
    assert_eq!(board.header().id(), MessageId::from(1));
}

#[test]
fn test_validation_messages() {
    let ids = IdAllocator::new();
    let err = BoardMessage::new(&ids, "", "Hello", Priority::Urgent).unwrap_err();
    assert_eq!(err.detail(), "Senders name cannot be empty");
    let err = BoardMessage::new(&ids, "Alice", "\t", Priority::Urgent).unwrap_err();
    assert_eq!(err.detail(), "Message content cannot be empty");
    let err = NewBoardMessage::new("Alice", "Hello").build(&ids).unwrap_err();
    assert_eq!(err.detail(), "priority cannot be null");
    let err = File::new("doc", "  ").unwrap_err();
    assert_eq!(err.detail(), "File type cannot be null or blank");
}

#[test]
fn test_sender_and_content_are_trimmed() {
    let ids = IdAllocator::new();
    let board = BoardMessage::new(&ids, "  Alice ", " Hello  ", Priority::Urgent).unwrap();
    assert_eq!(board.header().sender(), "Alice");
    assert_eq!(board.header().content(), "Hello");
}

#[test]
fn test_preview_formats() {
    let ids = IdAllocator::new();
    let board = BoardMessage::new(&ids, "Alice", "Meeting at 10 AM", Priority::Urgent).unwrap();
    assert_eq!(board.preview(), "[Board] Alice: Meeting at 10 A...");

    let short = BoardMessage::new(&ids, "Bob", "Exactly fifteen", Priority::Urgent).unwrap();
    assert_eq!(short.preview(), "[Board] Bob: Exactly fifteen");

    let email = EmailMessage::new(&ids, "Sam", "Body", "Hello").unwrap();
    assert_eq!(email.preview(), "[Email] Subject: Hello | From: Sam");

    let reaction =
        ReactionMessage::new(&ids, "Yoni", "Interesting perspective.", ReactionType::Laugh)
            .unwrap();
    assert_eq!(
        reaction.preview(),
        "[Reaction] Yoni: LAUGH - Interesting per..."
    );
}

#[test]
fn test_preview_truncation_counts_characters() {
    let ids = IdAllocator::new();
    let board =
        BoardMessage::new(&ids, "Eve", "Café crème brûlée à la carte", Priority::Urgent).unwrap();
    assert_eq!(board.preview(), "[Board] Eve: Café crème brûl...");
}

#[test]
fn test_find_is_case_insensitive_substring() {
    let ids = IdAllocator::new();
    let message: Message = BoardMessage::new(&ids, "Alice", "Meeting at 10 AM", Priority::Urgent)
        .unwrap()
        .into();
    assert!(message.find(&["meet"]));
    assert!(message.find(&["xyz", "AM"]));
    assert!(!message.find(&["xyz"]));
    assert!(!message.find::<&str>(&[]));
    assert!(!message.find(&["  "]));
    // sender is not searched
    assert!(!message.find(&["alice"]));
}

#[test]
fn test_remove_attachment_case_insensitive() {
    let ids = IdAllocator::new();
    let mut email = NewEmailMessage::new("Shany", "Docs", "Review")
        .with_attachments(vec![
            File::new("Document1", "pdf").unwrap(),
            File::new("Image1", "jpg").unwrap(),
        ])
        .build(&ids)
        .unwrap();

    email
        .remove_attachment(&File::new("DOCUMENT1", "PDF").unwrap())
        .unwrap();
    assert_eq!(email.attachments().len(), 1);
    assert_eq!(email.attachments()[0].name(), "Image1");

    let err = email
        .remove_attachment(&File::new("Document1", "pdf").unwrap())
        .unwrap_err();
    assert!(err.is_attachment());
    assert_eq!(err.detail(), "Attachment does not exist!");
}

#[test]
fn test_attachment_snapshot_is_independent() {
    let ids = IdAllocator::new();
    let mut email = EmailMessage::new(&ids, "Sam", "Body", "Hello").unwrap();
    email.add_attachment(File::new("Image1", "jpg").unwrap());

    let mut snapshot = email.attachments().to_vec();
    snapshot.push(File::new("Other", "txt").unwrap());
    assert_eq!(email.attachments().len(), 1);
}

#[test]
fn test_board_display_block() {
    let ids = IdAllocator::new();
    let reaction = NewReactionMessage::new("Shay", "Love this idea!")
        .with_reaction_type(ReactionType::Love)
        .with_sent_at(fixed_time(), fixed_time())
        .build(&ids)
        .unwrap();
    let board = NewBoardMessage::new("Lili", "Birthday party on Sunday.")
        .with_priority(Priority::Special)
        .with_reactions(vec![reaction])
        .with_sent_at(fixed_time(), fixed_time())
        .build(&ids)
        .unwrap();

    assert_eq!(
        board.describe(&DisplayConfig::default()),
        "Priority:SPECIAL\n\
         Message ID: 2\n\
         Sender: Lili\n\
         Content: Birthday party on Sunday.\n\
         Date: 2024-03-05\n\
         Time: 09:07:30\n\
         Reactions:\n\
         - Reaction Message\n\
         Sender: Shay\n\
         Reaction: LOVE\n\
         Content: Love this idea!\n\n"
    );
}

#[test]
fn test_email_display_block_in_timezone() {
    let ids = IdAllocator::new();
    let email = NewEmailMessage::new("Sam", "Check this", "Picture")
        .with_attachments(vec![File::new("Image1", "jpg").unwrap()])
        .with_sent_at(fixed_time(), fixed_time())
        .build(&ids)
        .unwrap();
    let display = DisplayConfig {
        timezone: "Asia/Tokyo".to_string(),
        ..DisplayConfig::default()
    };

    assert_eq!(
        email.describe(&display),
        "subject:Picture\n\
         Message ID: 1\n\
         Sender: Sam\n\
         Content: Check this\n\
         Date: 2024-03-05\n\
         Time: 18:07:30\n\
         Attachment List:\n\
         - File {name='Image1', type='jpg'}\n"
    );
}

#[test]
fn test_only_email_is_digital() {
    let catalog = MessageCatalog::with_defaults().unwrap();
    for message in catalog.iter() {
        assert_eq!(
            message.as_digital().is_some(),
            message.kind() == MessageKind::Email
        );
    }
    let digital: Vec<_> = catalog.filter(Capability::Digital).collect();
    assert_eq!(digital.len(), 2);
    assert_eq!(
        digital[0].as_digital().unwrap().communication_method(),
        "Sent via Email Server"
    );
}

#[test]
fn test_catalog_search_over_defaults() {
    let catalog = MessageCatalog::with_defaults().unwrap();

    let result = catalog.search(&Keywords::parse("interesting"));
    // the attached reaction on Lili's board is not a catalog entry
    assert_eq!(result.count(), 1);
    assert_eq!(result.matches[0].sender(), "Yoni");

    let result = catalog.search(&Keywords::parse("party, AMAZING, nothing"));
    assert_eq!(result.count(), 2);
    assert_eq!(result.keywords.to_string(), "[party, AMAZING, nothing]");
}

#[test]
fn test_catalog_delete_then_ids_continue() {
    let mut catalog = MessageCatalog::with_defaults().unwrap();
    assert!(catalog.delete_by_id(MessageId::from(9)));
    assert!(!catalog.delete_by_id(MessageId::from(9)));

    let board = BoardMessage::new(catalog.ids(), "Zed", "New", Priority::Regular).unwrap();
    assert_eq!(board.header().id(), MessageId::from(10));
    catalog.add(board);
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.iter().last().unwrap().sender(), "Zed");
}

#[test]
fn test_attach_reaction_to_seeded_board() {
    let mut catalog = MessageCatalog::with_defaults().unwrap();
    let reaction =
        ReactionMessage::new(catalog.ids(), "Bob", "Count me in", ReactionType::Like).unwrap();
    catalog.attach_reaction(MessageId::from(5), reaction).unwrap();

    let board = catalog.get(MessageId::from(5)).unwrap().as_board().unwrap();
    assert_eq!(board.reactions().len(), 3);
    assert_eq!(board.reactions()[2].header().sender(), "Bob");
    // the reaction lives inside the board, not at catalog level
    assert_eq!(catalog.len(), 7);
}
