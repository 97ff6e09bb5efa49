//! Shared setup for the chat-room integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use yoriai_chat::{
    client::ChatParticipant,
    domain::{ChatRoom, ParticipantName, RoomName},
    infrastructure::writer::InMemoryTranscript,
    usecase::register_chat_handlers,
};
use yoriai_mediator::Mediator;

/// A participant together with the transcript its deliveries land in.
pub struct Member {
    pub participant: Arc<ChatParticipant>,
    pub inbox: Arc<InMemoryTranscript>,
}

impl Member {
    /// Contents received so far, in delivery order.
    pub fn received(&self) -> Vec<String> {
        self.inbox
            .entries()
            .iter()
            .map(|entry| entry.message.content().to_string())
            .collect()
    }
}

pub struct ChatFixture {
    pub mediator: Arc<Mediator>,
    pub room1: Arc<ChatRoom>,
    pub room2: Arc<ChatRoom>,
    pub bob: Member,
    pub alice: Member,
    pub numpty: Member,
}

impl ChatFixture {
    /// Mediator with the built-in handlers, two rooms and three participants.
    pub fn new() -> Self {
        let mediator = Arc::new(Mediator::new());
        register_chat_handlers(&mediator).unwrap();
        Self {
            room1: room("Room 1"),
            room2: room("Room 2"),
            bob: member(&mediator, "bob"),
            alice: member(&mediator, "alice"),
            numpty: member(&mediator, "numpty"),
            mediator,
        }
    }
}

pub fn room(name: &str) -> Arc<ChatRoom> {
    Arc::new(ChatRoom::new(RoomName::new(name.to_string()).unwrap()))
}

pub fn member(mediator: &Arc<Mediator>, name: &str) -> Member {
    let inbox = Arc::new(InMemoryTranscript::new());
    let participant = ChatParticipant::new(
        Arc::clone(mediator),
        ParticipantName::new(name.to_string()).unwrap(),
        inbox.clone(),
    );
    Member { participant, inbox }
}

pub fn names(participants: &[Arc<dyn yoriai_chat::domain::Participant>]) -> Vec<String> {
    participants.iter().map(|p| p.name().to_string()).collect()
}
