use std::fmt;

use thiserror::Error;

/// Separator between clue and verb in persisted statistics keys.
/// Neither a clue label nor a verb name may contain it.
pub const PROMPT_SEPARATOR: char = '+';

/// A (clue, verb) pair that expects one conjugated form as its answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prompt {
    clue: String,
    verb: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid statistics key {key:?}: expected \"<clue>{PROMPT_SEPARATOR}<verb>\"")]
pub struct MalformedKey {
    pub key: String,
}

impl Prompt {
    pub fn new(clue: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            verb: verb.into(),
        }
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Key used in the statistics file.
    pub fn encode(&self) -> String {
        format!("{}{PROMPT_SEPARATOR}{}", self.clue, self.verb)
    }

    /// Inverse of [`Prompt::encode`]. Exactly one separator is accepted.
    pub fn decode(key: &str) -> Result<Self, MalformedKey> {
        let mut parts = key.split(PROMPT_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(clue), Some(verb), None) => Ok(Self::new(clue, verb)),
            _ => Err(MalformedKey {
                key: key.to_string(),
            }),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.clue, self.verb)
    }
}
