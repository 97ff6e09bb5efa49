//! Core domain models for the chat rooms.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};

use super::{
    factory::RoomIdFactory,
    participant::Participant,
    value_object::{MessageContent, ParticipantId, ParticipantName, RoomId, RoomName, Timestamp},
};

/// Represents a chat room with its members and message history.
///
/// Membership and history live behind locks so a room can be shared between
/// handlers. Locks are released before any participant is notified.
pub struct ChatRoom {
    /// Room identifier
    id: RoomId,
    /// Room name
    name: RoomName,
    /// Participants currently in the room, in join order
    participants: RwLock<Vec<Arc<dyn Participant>>>,
    /// Message history in the room, in recording order
    messages: RwLock<Vec<ChatMessage>>,
}

impl ChatRoom {
    /// Create a new empty room with a generated identifier
    pub fn new(name: RoomName) -> Self {
        Self::with_id(RoomIdFactory::generate(), name)
    }

    /// Create a new empty room with the given identifier
    pub fn with_id(id: RoomId, name: RoomName) -> Self {
        Self {
            id,
            name,
            participants: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// Add a participant to the room.
    ///
    /// Joining twice adds a second membership entry.
    pub fn add_participant(&self, participant: Arc<dyn Participant>) {
        write(&self.participants).push(participant);
    }

    /// Remove the first membership entry of a participant.
    ///
    /// Removing a participant who is not a member does nothing.
    pub fn remove_participant(&self, participant_id: &ParticipantId) {
        let mut participants = write(&self.participants);
        if let Some(index) = participants.iter().position(|p| p.id() == participant_id) {
            participants.remove(index);
        }
    }

    /// Append a message to the room history
    pub fn record_message(&self, message: ChatMessage) {
        write(&self.messages).push(message);
    }

    /// Snapshot of the current members, in join order
    pub fn list_participants(&self) -> Vec<Arc<dyn Participant>> {
        read(&self.participants).clone()
    }

    /// Snapshot of the message history, in recording order
    pub fn list_messages(&self) -> Vec<ChatMessage> {
        read(&self.messages).clone()
    }

    /// Whether the participant currently has a membership entry
    pub fn contains(&self, participant_id: &ParticipantId) -> bool {
        read(&self.participants)
            .iter()
            .any(|p| p.id() == participant_id)
    }

    pub fn participant_count(&self) -> usize {
        read(&self.participants).len()
    }

    pub fn message_count(&self) -> usize {
        read(&self.messages).len()
    }
}

impl PartialEq for ChatRoom {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ChatRoom {}

impl fmt::Debug for ChatRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRoom")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("participants", &*read(&self.participants))
            .field("messages", &self.message_count())
            .finish()
    }
}

// Writers only push or remove whole entries, so the data behind a poisoned
// lock is still consistent.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Represents a chat message in the domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's participant ID
    from: ParticipantId,
    /// Sender's name at the time the message was written
    sender_name: ParticipantName,
    /// Message content
    content: MessageContent,
    /// Timestamp when the message was created
    timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message from `sender`, stamped with the current time
    pub fn new<P: Participant + ?Sized>(sender: &P, content: MessageContent) -> Self {
        Self::with_timestamp(
            *sender.id(),
            sender.name().clone(),
            content,
            Timestamp::now(),
        )
    }

    /// Create a chat message with every field given explicitly
    pub fn with_timestamp(
        from: ParticipantId,
        sender_name: ParticipantName,
        content: MessageContent,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            from,
            sender_name,
            content,
            timestamp,
        }
    }

    pub fn sender_id(&self) -> &ParticipantId {
        &self.from
    }

    pub fn sender_name(&self) -> &ParticipantName {
        &self.sender_name
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Whether `participant` wrote this message
    pub fn is_from<P: Participant + ?Sized>(&self, participant: &P) -> bool {
        &self.from == participant.id()
    }
}
