//! Chat rooms built on the Yoriai command/query mediator.
//!
//! Participants never touch a [`domain::ChatRoom`] directly. Joining,
//! leaving and sending are commands, listing is a query, and all of them go
//! through a [`yoriai_mediator::Mediator`] with the handlers from
//! [`usecase::register_chat_handlers`] installed.
//!
//! ```
//! use std::sync::Arc;
//!
//! use yoriai_chat::{
//!     client::ChatParticipant,
//!     domain::{ChatRoom, ParticipantName, RoomName},
//!     infrastructure::writer::InMemoryTranscript,
//!     usecase::register_chat_handlers,
//! };
//! use yoriai_mediator::Mediator;
//!
//! let mediator = Arc::new(Mediator::new());
//! register_chat_handlers(&mediator).unwrap();
//!
//! let lobby = Arc::new(ChatRoom::new(RoomName::new("lobby".to_string()).unwrap()));
//! let inbox = Arc::new(InMemoryTranscript::new());
//! let alice = ChatParticipant::new(
//!     mediator.clone(),
//!     ParticipantName::new("alice".to_string()).unwrap(),
//!     inbox.clone(),
//! );
//!
//! alice.join(&lobby);
//! alice.send_message_to(&lobby, "Hello!").unwrap();
//!
//! assert_eq!(inbox.len(), 1);
//! assert_eq!(alice.list_messages_of(&lobby).unwrap().len(), 1);
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ChatConfig;
pub use error::ChatError;
