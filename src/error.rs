use thiserror::Error;

use crate::engine::prompt::MalformedKey;
use crate::engine::sampler::SampleError;
use crate::vocab::VocabError;

/// Process exit statuses. Published values never change; new causes get new
/// numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Ok = 0,
    Vocabulary = 1,
    Logging = 2,
    Terminal = 3,
    Internal = 4,
    /// Reserved: mistake-log failures are never fatal.
    #[allow(dead_code)]
    MistakesLogging = 5,
    Statistics = 6,
    EmptyCatalog = 7,
    Config = 8,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Errors that stop the program.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("configuration error: {0:#}")]
    Config(anyhow::Error),
    #[error("cannot set up logging: {0:#}")]
    Logging(anyhow::Error),
    #[error(transparent)]
    Vocabulary(#[from] VocabError),
    #[error("vocabulary has no question with an answer")]
    EmptyCatalog,
    #[error("statistics file error: {0:#}")]
    StatisticsFile(anyhow::Error),
    #[error(transparent)]
    StatisticsKey(#[from] MalformedKey),
    #[error("cannot pick a question: {0}")]
    Sampler(#[from] SampleError),
    #[error("terminal error: {0:#}")]
    Terminal(anyhow::Error),
}

impl FatalError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            FatalError::Config(_) => ExitStatus::Config,
            FatalError::Logging(_) => ExitStatus::Logging,
            FatalError::Vocabulary(_) => ExitStatus::Vocabulary,
            FatalError::EmptyCatalog => ExitStatus::EmptyCatalog,
            FatalError::StatisticsFile(_) | FatalError::StatisticsKey(_) => ExitStatus::Statistics,
            FatalError::Sampler(SampleError::Empty) => ExitStatus::EmptyCatalog,
            FatalError::Sampler(SampleError::Exhausted { .. }) => ExitStatus::Internal,
            FatalError::Terminal(_) => ExitStatus::Terminal,
        }
    }
}
