//! Demo messages a fresh catalog can start with.

use crate::message::{
    BoardMessage, File, IdAllocator, Message, NewBoardMessage, NewEmailMessage,
    Priority, ReactionMessage, ReactionType,
};
use crate::Result;

/// Build the demo messages in catalog order.
pub(crate) fn default_messages(ids: &IdAllocator) -> Result<Vec<Message>> {
    let mut messages: Vec<Message> = vec![
        BoardMessage::new(ids, "Alice", "Meeting at 10 AM", Priority::Urgent)?.into(),
        BoardMessage::new(
            ids,
            "Bob",
            "Weekly report submission deadline",
            Priority::Regular,
        )?
        .into(),
    ];

    let reactions = vec![
        ReactionMessage::new(ids, "Shay", "Love this idea!", ReactionType::Love)?,
        ReactionMessage::new(ids, "Frank", "Interesting perspective.", ReactionType::Laugh)?,
    ];
    messages.push(
        NewBoardMessage::new("Lili", "Birthday party on Sunday.")
            .with_priority(Priority::Special)
            .with_reactions(reactions)
            .build(ids)?
            .into(),
    );

    messages.push(
        NewEmailMessage::new(
            "Shany",
            "Here are the documents for review.",
            "Documents Review",
        )
        .with_attachments(vec![
            File::new("Document1", "pdf")?,
            File::new("Presentation1", "ppt")?,
        ])
        .build(ids)?
        .into(),
    );
    messages.push(
        NewEmailMessage::new("Sam", "Check out this amazing picture!", "Amazing Picture")
            .with_attachments(vec![File::new("Image1", "jpg")?])
            .build(ids)?
            .into(),
    );

    messages.push(ReactionMessage::new(ids, "Lili", "Love this idea!", ReactionType::Love)?.into());
    messages.push(
        ReactionMessage::new(ids, "Yoni", "Interesting perspective.", ReactionType::Laugh)?.into(),
    );

    Ok(messages)
}
