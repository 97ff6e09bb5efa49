//! UI 層
//!
//! スクリプトでチャットセッションを再生する CLI を提供します。
//! 参加者の操作はすべて client 層を経由して Mediator に送られます。

pub mod cli;
pub mod runner;
pub mod script;

pub use cli::{Cli, run};
pub use runner::SessionRunner;
pub use script::{ScriptError, ScriptLine, ScriptStep, parse_script};
