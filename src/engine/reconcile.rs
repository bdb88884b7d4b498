//! Merging a saved statistics snapshot into a freshly built store, and the
//! inverse: packing the store back into a snapshot.

use crate::engine::prompt::{MalformedKey, Prompt};
use crate::engine::stats::{PromptStats, StatisticsStore};
use crate::store::schema::{PromptRecord, StatisticsFile};

/// Outcome of merging a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Records whose counters were taken over.
    pub adopted: usize,
    /// Records for prompts missing from the vocabulary, kept aside.
    pub dead: usize,
    /// Records dropped because the expected answer changed.
    pub reset: usize,
}

impl StatisticsStore {
    /// Applies a saved snapshot to this store.
    ///
    /// Every key is decoded before anything is applied, so a malformed key
    /// leaves the store as it was.
    pub fn reconcile(&mut self, snapshot: &StatisticsFile) -> Result<ReconcileReport, MalformedKey> {
        tracing::info!(entries = snapshot.len(), "updating statistics from file");
        let decoded = snapshot
            .statistics
            .iter()
            .map(|(key, record)| Prompt::decode(key).map(|prompt| (key, prompt, record)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = ReconcileReport::default();
        for (key, prompt, record) in decoded {
            let Some(answer) = self.answer(&prompt) else {
                self.dead_records.insert(key.clone(), record.clone());
                report.dead += 1;
                continue;
            };
            if answer != record.answer {
                self.update_stats(&prompt, PromptStats::default());
                report.reset += 1;
                continue;
            }
            let stats = PromptStats::new(record.streak, record.correct, record.mistakes);
            self.update_stats(&prompt, stats);
            report.adopted += 1;
        }

        if report.dead > 0 {
            tracing::info!(
                count = report.dead,
                "saved questions no longer exist, keeping their statistics aside"
            );
        }
        if report.reset > 0 {
            tracing::warn!(
                count = report.reset,
                "saved questions have a changed answer, resetting their statistics"
            );
        }
        Ok(report)
    }

    /// Snapshot of everything worth saving: dead records verbatim, then every
    /// prompt that has been answered at least once. Untouched prompts are left
    /// out so the file grows with practice, not with the vocabulary.
    pub fn pack(&self) -> StatisticsFile {
        let mut statistics = self.dead_records.clone();
        for (prompt, stats) in self.iter() {
            if !stats.attempted() {
                continue;
            }
            statistics.insert(
                prompt.encode(),
                PromptRecord {
                    streak: stats.streak,
                    correct: stats.correct,
                    mistakes: stats.mistakes,
                    answer: self.answer(prompt).unwrap_or_default().to_string(),
                },
            );
        }
        StatisticsFile { statistics }
    }
}
