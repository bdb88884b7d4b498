use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One persisted prompt. Field names match the on-disk format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PromptRecord {
    pub streak: u16,
    pub correct: u16,
    pub mistakes: u16,
    /// The expected answer at the time the record was written. A mismatch with
    /// the current vocabulary invalidates the counters.
    pub answer: String,
}

/// Contents of the statistics file, keyed by encoded prompt (`clue+verb`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsFile {
    #[serde(rename = "Statistics", default)]
    pub statistics: BTreeMap<String, PromptRecord>,
}

impl StatisticsFile {
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }
}
