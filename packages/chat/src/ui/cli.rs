//! Command-line interface of the `yoriai` binary.

use std::{
    fmt::Write as _,
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::info;

use crate::{
    config::{ChatConfig, DEFAULT_MODERATOR_ROOM},
    error::ChatError,
    infrastructure::dto::{QueryResultDto, SessionReportDto, TranscriptEntryDto},
    ui::{runner::SessionRunner, script::parse_script},
};

/// Plays a scripted chat session through the mediator.
#[derive(Parser, Debug)]
#[command(name = "yoriai", version, about)]
pub struct Cli {
    /// Script file to play; reads standard input when omitted.
    #[arg(long, short, value_name = "FILE")]
    pub script: Option<PathBuf>,
    /// Default log level (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    pub log_level: String,
    /// Word the moderator reports; repeat for more words.
    #[arg(long = "banned-word", value_name = "WORD")]
    pub banned_words: Vec<String>,
    /// Room moderator reports are sent to.
    #[arg(long, default_value = DEFAULT_MODERATOR_ROOM)]
    pub moderator_room: String,
    /// Print the session report as JSON.
    #[arg(long)]
    pub json: bool,
    /// Log every delivered message as it arrives.
    #[arg(long)]
    pub log_deliveries: bool,
}

impl Cli {
    /// Session configuration selected by the flags.
    pub fn config(&self) -> ChatConfig {
        ChatConfig {
            banned_words: self.banned_words.clone(),
            moderator_room: self.moderator_room.clone(),
            log_deliveries: self.log_deliveries,
            ..ChatConfig::default()
        }
    }
}

/// Read the script, play it, and print the report to standard output.
///
/// # Errors
///
/// Returns `ChatError` if the script cannot be read or parsed, a step is
/// invalid, or the report cannot be written.
pub fn run(cli: &Cli) -> Result<(), ChatError> {
    let source = read_script(cli)?;
    let steps = parse_script(&source)?;
    info!(steps = steps.len(), "script parsed");

    let mut runner = SessionRunner::new(cli.config())?;
    let report = runner.run(&steps)?;

    let output = if cli.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else {
        render_text(&report)
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn read_script(cli: &Cli) -> Result<String, ChatError> {
    match &cli.script {
        Some(path) => fs::read_to_string(path).map_err(|source| ChatError::ReadScript {
            path: path.clone(),
            source,
        }),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Human-readable rendering of a session report.
pub fn render_text(report: &SessionReportDto) -> String {
    let mut out = String::new();
    for query in &report.queries {
        match query {
            QueryResultDto::Participants {
                line,
                requester,
                room,
                participants,
            } => {
                let _ = writeln!(
                    out,
                    "[line {line}] {requester} lists participants of '{room}': {}",
                    participants.join(", ")
                );
            }
            QueryResultDto::Messages {
                line,
                requester,
                room,
                messages,
            } => {
                let _ = writeln!(out, "[line {line}] {requester} lists messages of '{room}':");
                for message in messages {
                    push_entry(&mut out, message);
                }
            }
        }
    }
    for transcript in &report.transcripts {
        let _ = writeln!(out, "== {} received ==", transcript.participant);
        for entry in &transcript.received {
            push_entry(&mut out, entry);
        }
    }
    out
}

fn push_entry(out: &mut String, entry: &TranscriptEntryDto) {
    let _ = writeln!(
        out,
        "  [{}] {} {}: {}",
        entry.room, entry.sent_at, entry.from, entry.content
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dto::ParticipantTranscriptDto;

    #[test]
    fn test_cli_parses_flags() {
        // テスト項目: CLI フラグから設定を組み立てられる
        // when (操作):
        let cli = Cli::parse_from([
            "yoriai",
            "--script",
            "session.txt",
            "--banned-word",
            "idiot",
            "--banned-word",
            "numpty",
            "--moderator-room",
            "Mods",
            "--json",
            "--log-deliveries",
        ]);

        // then (期待する結果):
        assert_eq!(cli.script, Some(PathBuf::from("session.txt")));
        assert_eq!(cli.log_level, "info");
        assert!(cli.json);
        let config = cli.config();
        assert_eq!(config.banned_words, vec!["idiot", "numpty"]);
        assert_eq!(config.moderator_room, "Mods");
        assert!(config.log_deliveries);
        assert_eq!(config.max_message_length, 10_000);
    }

    #[test]
    fn test_cli_defaults() {
        // テスト項目: フラグ未指定時は標準入力とデフォルト設定を使う
        let cli = Cli::parse_from(["yoriai"]);
        assert!(cli.script.is_none());
        assert!(!cli.json);
        assert_eq!(cli.config(), ChatConfig::default());
    }

    #[test]
    fn test_render_text() {
        // テスト項目: レポートをテキストで出力できる
        // given (前提条件):
        let entry = TranscriptEntryDto {
            room: "lobby".to_string(),
            from: "bob".to_string(),
            content: "Hello!".to_string(),
            sent_at: "2022-12-31T15:00:00.000Z".to_string(),
        };
        let report = SessionReportDto {
            queries: vec![QueryResultDto::Participants {
                line: 2,
                requester: "alice".to_string(),
                room: "lobby".to_string(),
                participants: vec!["bob".to_string(), "alice".to_string()],
            }],
            transcripts: vec![ParticipantTranscriptDto {
                participant: "alice".to_string(),
                received: vec![entry],
            }],
        };

        // when (操作):
        let text = render_text(&report);

        // then (期待する結果):
        assert_eq!(
            text,
            "[line 2] alice lists participants of 'lobby': bob, alice\n== alice received ==\n  [lobby] 2022-12-31T15:00:00.000Z bob: Hello!\n"
        );
    }

    #[test]
    fn test_run_reports_missing_script_file() {
        // テスト項目: 存在しないスクリプトファイルはパス付きでエラーになる
        // given (前提条件):
        let cli = Cli::parse_from(["yoriai", "--script", "/nonexistent/yoriai-session.txt"]);

        // when (操作):
        let result = run(&cli);

        // then (期待する結果):
        assert!(matches!(result, Err(ChatError::ReadScript { .. })));
    }
}
