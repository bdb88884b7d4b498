use crate::engine::prompt::Prompt;
use crate::engine::stats::StatisticsStore;
use crate::vocab::VocabularyTable;

/// What the catalog pass found in the vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogReport {
    pub prompts: usize,
    /// (verb, clue) pairs with no form, skipped.
    pub missing_forms: usize,
    /// Pairs already seen in an earlier row, skipped.
    pub duplicates: usize,
}

/// Builds a fresh store holding one zeroed entry per (clue, verb) pair that
/// has a non-empty form. Prompts are inserted verb by verb, in clue order.
pub fn build(table: &VocabularyTable) -> (StatisticsStore, CatalogReport) {
    tracing::info!("initializing statistics");
    let mut store = StatisticsStore::new();
    let mut report = CatalogReport::default();

    for (verb_index, verb) in table.verbs().iter().enumerate() {
        for (clue_index, clue) in table.clues().iter().enumerate() {
            let answer = match table.form(verb_index, clue_index) {
                Some(form) if !form.trim().is_empty() => form,
                _ => {
                    report.missing_forms += 1;
                    continue;
                }
            };
            if store.insert(Prompt::new(clue.as_str(), verb.as_str()), answer.to_string()) {
                report.prompts += 1;
            } else {
                report.duplicates += 1;
            }
        }
    }

    if report.missing_forms > 0 {
        tracing::warn!(count = report.missing_forms, "missing vocabulary forms");
    }
    if report.duplicates > 0 {
        tracing::warn!(count = report.duplicates, "duplicate prompts ignored, first row wins");
    }
    tracing::info!(prompts = report.prompts, "statistics initialized");

    (store, report)
}
