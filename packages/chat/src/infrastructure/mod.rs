//! Infrastructure 層
//!
//! ドメイン層が定義する `MessageSink` trait の具体的な実装と、
//! 外部へ出力するための DTO を提供します。

pub mod dto;
pub mod writer;
