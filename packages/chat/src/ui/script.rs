//! Line-based session script.
//!
//! ```text
//! # comment
//! join alice lobby
//! say alice lobby Hello, everyone!
//! participants alice lobby
//! messages alice lobby
//! leave alice lobby
//! ```
//!
//! Participant and room names are single whitespace-separated tokens. The
//! text of `say` is the rest of the line.

use thiserror::Error;

/// One parsed script instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Join { participant: String, room: String },
    Leave { participant: String, room: String },
    Say { participant: String, room: String, text: String },
    Participants { participant: String, room: String },
    Messages { participant: String, room: String },
}

/// A step together with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: ScriptStep,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{verb}'")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: '{verb}' is missing its {expected}")]
    MissingArgument {
        line: usize,
        verb: String,
        expected: &'static str,
    },
}

/// Parse a whole script.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns the first `ScriptError` found.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step = parse_line(line, trimmed)?;
        steps.push(ScriptLine { line, step });
    }
    Ok(steps)
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Join,
    Leave,
    Say,
    Participants,
    Messages,
}

impl Verb {
    fn parse(verb: &str) -> Option<Self> {
        match verb {
            "join" => Some(Self::Join),
            "leave" => Some(Self::Leave),
            "say" => Some(Self::Say),
            "participants" => Some(Self::Participants),
            "messages" => Some(Self::Messages),
            _ => None,
        }
    }
}

fn parse_line(line: usize, input: &str) -> Result<ScriptStep, ScriptError> {
    let (verb, rest) = next_token(input).unwrap_or((input, ""));
    let Some(kind) = Verb::parse(verb) else {
        return Err(ScriptError::UnknownCommand {
            line,
            verb: verb.to_string(),
        });
    };
    let missing = |expected| ScriptError::MissingArgument {
        line,
        verb: verb.to_string(),
        expected,
    };

    let (participant, rest) = next_token(rest).ok_or_else(|| missing("participant"))?;
    let (room, rest) = next_token(rest).ok_or_else(|| missing("room"))?;
    let participant = participant.to_string();
    let room = room.to_string();

    let step = match kind {
        Verb::Join => ScriptStep::Join { participant, room },
        Verb::Leave => ScriptStep::Leave { participant, room },
        Verb::Participants => ScriptStep::Participants { participant, room },
        Verb::Messages => ScriptStep::Messages { participant, room },
        Verb::Say => {
            let text = rest.trim();
            if text.is_empty() {
                return Err(missing("text"));
            }
            ScriptStep::Say {
                participant,
                room,
                text: text.to_string(),
            }
        }
    };
    Ok(step)
}

/// Split off the next whitespace-separated token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}
