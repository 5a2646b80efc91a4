//! Navigation scripts: one command per line.
//!
//! ```text
//! # comments and blank lines are ignored
//! galaxy milky-way
//! system sol
//! planet earth
//! moon luna
//! moon            # clears the moon
//! back
//! finish
//! settle          # let the transition driver run until idle
//! galaxy "deep field #2"
//! ```
//!
//! Ids are bare words unless they contain whitespace, `#`, `"` or `\`, or
//! are empty; those are written in double quotes with `\` escapes.

use crate::NavigationCommand;
use horizon_content::EntityId;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },

    #[error("line {line}: '{command}' needs an id")]
    MissingArgument { line: usize, command: String },

    #[error("line {line}: '{command}' takes no argument, got '{extra}'")]
    UnexpectedArgument {
        line: usize,
        command: String,
        extra: String,
    },

    #[error("line {line}: unterminated quoted id")]
    UnterminatedQuote { line: usize },
}

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptAction {
    Command(NavigationCommand),
    /// Run the transition driver until the state is idle.
    Settle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based source line.
    pub line: usize,
    pub action: ScriptAction,
}

pub fn parse_script(source: &str) -> ScriptResult<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let words = split_words(line, raw)?;
        let Some(word) = words.first() else {
            continue;
        };
        if let Some(extra) = words.get(2) {
            return Err(ScriptError::UnexpectedArgument {
                line,
                command: word.clone(),
                extra: extra.clone(),
            });
        }

        let argument = words.get(1).map(String::as_str);
        let action = parse_action(line, word, argument)?;
        steps.push(ScriptStep { line, action });
    }
    Ok(steps)
}

/// Script form of an id: bare when it is a plain word, quoted otherwise.
pub fn script_word(id: &str) -> Cow<'_, str> {
    let plain = !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\\'));
    if plain {
        return Cow::Borrowed(id);
    }
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Words of one line, up to an unquoted `#`.
fn split_words(line: usize, raw: &str) -> ScriptResult<Vec<String>> {
    let mut words = Vec::new();
    let mut chars = raw.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.peek() {
            None | Some('#') => break,
            Some('"') => {
                chars.next();
                let mut word = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => word.push(escaped),
                            None => return Err(ScriptError::UnterminatedQuote { line }),
                        },
                        Some(c) => word.push(c),
                        None => return Err(ScriptError::UnterminatedQuote { line }),
                    }
                }
                words.push(word);
            }
            Some(_) => {
                let mut word = String::new();
                while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != '#') {
                    word.push(c);
                }
                words.push(word);
            }
        }
    }
    Ok(words)
}

fn parse_action(line: usize, word: &str, argument: Option<&str>) -> ScriptResult<ScriptAction> {
    let required = |argument: Option<&str>| -> ScriptResult<EntityId> {
        argument
            .map(EntityId::from)
            .ok_or_else(|| ScriptError::MissingArgument {
                line,
                command: word.to_string(),
            })
    };
    let none = |action: ScriptAction| match argument {
        Some(extra) => Err(ScriptError::UnexpectedArgument {
            line,
            command: word.to_string(),
            extra: extra.to_string(),
        }),
        None => Ok(action),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "universe" => return none(ScriptAction::Command(NavigationCommand::Universe)),
        "back" => return none(ScriptAction::Command(NavigationCommand::Back)),
        "finish" => return none(ScriptAction::Command(NavigationCommand::Finish)),
        "reset" => return none(ScriptAction::Command(NavigationCommand::Reset)),
        "settle" => return none(ScriptAction::Settle),
        "galaxy" => NavigationCommand::Galaxy(required(argument)?),
        "system" | "solar-system" => NavigationCommand::SolarSystem(required(argument)?),
        "planet" => NavigationCommand::Planet(required(argument)?),
        "moon" => NavigationCommand::Moon(argument.unwrap_or_default().into()),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: word.to_string(),
            })
        }
    };
    Ok(ScriptAction::Command(command))
}
