//! Participant-side façade.
//!
//! Everything here talks to chat rooms only through the mediator.

pub mod moderator;
pub mod participant;

pub use moderator::ChatModerator;
pub use participant::ChatParticipant;
