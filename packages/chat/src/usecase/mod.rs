//! UseCase 層
//!
//! チャットルームに対するコマンドとクエリ、およびそのハンドラを定義します。
//! 呼び出し側は Mediator 経由でのみこれらを実行し、ハンドラが Domain 層を操作します。

pub mod join_chat_room;
pub mod leave_chat_room;
pub mod list_messages;
pub mod list_participants;
pub mod send_chat_message;

pub use join_chat_room::{JoinChatRoomCommand, JoinChatRoomHandler};
pub use leave_chat_room::{LeaveChatRoomCommand, LeaveChatRoomHandler};
pub use list_messages::{ListMessagesHandler, ListMessagesQuery};
pub use list_participants::{ListParticipantsHandler, ListParticipantsQuery};
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler};

use yoriai_mediator::{Mediator, RegistrationError};

/// 組み込みのチャットハンドラ 5 種を Mediator に登録する
///
/// # Errors
///
/// クエリハンドラが既に登録済みの場合は `RegistrationError` を返す
pub fn register_chat_handlers(mediator: &Mediator) -> Result<(), RegistrationError> {
    mediator.register(JoinChatRoomHandler)?;
    mediator.register(LeaveChatRoomHandler)?;
    mediator.register(SendChatMessageHandler)?;
    mediator.register(ListParticipantsHandler)?;
    mediator.register(ListMessagesHandler)?;
    Ok(())
}
