//! Domain layer for the chat rooms.
//!
//! This module contains the chat-room state and the capabilities the
//! mediator's handlers operate on. It knows nothing about how requests are
//! dispatched.

pub mod entity;
pub mod error;
pub mod factory;
pub mod participant;
pub mod sink;
pub mod value_object;

pub use entity::{ChatMessage, ChatRoom};
pub use error::InvalidArgumentError;
pub use factory::{ParticipantIdFactory, RoomIdFactory};
pub use participant::Participant;
pub use sink::MessageSink;
pub use value_object::{
    DEFAULT_MAX_MESSAGE_LENGTH, DEFAULT_MAX_NAME_LENGTH, MessageContent, ParticipantId,
    ParticipantName, RoomId, RoomName, Timestamp,
};
