use std::collections::{BTreeMap, HashMap};

use crate::engine::prompt::Prompt;
use crate::store::schema::PromptRecord;

/// Per-prompt answer history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PromptStats {
    /// Correct answers in a row since the last mistake.
    pub streak: u16,
    pub correct: u16,
    pub mistakes: u16,
}

impl PromptStats {
    pub fn new(streak: u16, correct: u16, mistakes: u16) -> Self {
        Self {
            streak,
            correct,
            mistakes,
        }
    }

    /// Sampling weight: 1 for a fresh prompt, shrinking as the streak grows.
    pub fn weight(&self) -> f64 {
        1.0 / (1.0 + f64::from(self.streak))
    }

    pub fn attempted(&self) -> bool {
        self.correct != 0 || self.mistakes != 0
    }

    fn continued(self) -> Self {
        Self {
            streak: self.streak.saturating_add(1),
            correct: self.correct.saturating_add(1),
            mistakes: self.mistakes,
        }
    }

    fn ended(self) -> Self {
        Self {
            streak: 0,
            correct: self.correct,
            mistakes: self.mistakes.saturating_add(1),
        }
    }
}

/// Statistics for every known prompt plus the running sum of their weights.
///
/// `total_weight` is maintained incrementally by [`StatisticsStore::update_stats`],
/// the only path that replaces an entry. Prompts keep the order in which the
/// catalog inserted them, which is the order the sampler walks.
#[derive(Clone, Debug, Default)]
pub struct StatisticsStore {
    order: Vec<Prompt>,
    statistics: HashMap<Prompt, PromptStats>,
    answers: HashMap<Prompt, String>,
    total_weight: f64,
    pub(crate) dead_records: BTreeMap<String, PromptRecord>,
}

impl StatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prompt with fresh stats. Returns false, leaving the store
    /// unchanged, if the prompt is already known.
    pub(crate) fn insert(&mut self, prompt: Prompt, answer: String) -> bool {
        if self.statistics.contains_key(&prompt) {
            return false;
        }
        let stats = PromptStats::default();
        self.total_weight += stats.weight();
        self.statistics.insert(prompt.clone(), stats);
        self.answers.insert(prompt.clone(), answer);
        self.order.push(prompt);
        true
    }

    /// Replaces the stats of a known prompt, moving `total_weight` by the
    /// weight delta. Returns the previous stats, or None for an unknown prompt.
    pub fn update_stats(&mut self, prompt: &Prompt, new_stats: PromptStats) -> Option<PromptStats> {
        let entry = self.statistics.get_mut(prompt)?;
        let old = *entry;
        self.total_weight -= old.weight();
        *entry = new_stats;
        self.total_weight += new_stats.weight();
        Some(old)
    }

    /// Records a correct answer. Returns the new stats.
    pub fn continue_streak(&mut self, prompt: &Prompt) -> Option<PromptStats> {
        let new_stats = self.get(prompt)?.continued();
        self.update_stats(prompt, new_stats)?;
        Some(new_stats)
    }

    /// Records a wrong answer. Returns the new stats.
    pub fn end_streak(&mut self, prompt: &Prompt) -> Option<PromptStats> {
        let new_stats = self.get(prompt)?.ended();
        self.update_stats(prompt, new_stats)?;
        Some(new_stats)
    }

    pub fn get(&self, prompt: &Prompt) -> Option<PromptStats> {
        self.statistics.get(prompt).copied()
    }

    pub fn answer(&self, prompt: &Prompt) -> Option<&str> {
        self.answers.get(prompt).map(String::as_str)
    }

    pub fn contains(&self, prompt: &Prompt) -> bool {
        self.statistics.contains_key(prompt)
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Sum of weights computed from scratch. Only for checking drift.
    pub fn recomputed_weight(&self) -> f64 {
        self.statistics.values().map(PromptStats::weight).sum()
    }

    /// Overwrites the running total, standing in for accumulated drift.
    #[cfg(test)]
    pub(crate) fn set_total_weight(&mut self, total: f64) {
        self.total_weight = total;
    }

    /// Length in chars of the longest expected answer.
    pub fn longest_answer(&self) -> usize {
        self.answers
            .values()
            .map(|answer| answer.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Prompts in catalog order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.order
    }

    /// Prompts with their stats, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&Prompt, PromptStats)> + '_ {
        self.order
            .iter()
            .map(|prompt| (prompt, self.statistics[prompt]))
    }

    /// Saved records whose prompt is missing from the current vocabulary.
    pub fn dead_records(&self) -> &BTreeMap<String, PromptRecord> {
        &self.dead_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn store_with(prompts: &[(&str, &str, &str)]) -> StatisticsStore {
        let mut store = StatisticsStore::new();
        for (clue, verb, answer) in prompts {
            store.insert(Prompt::new(*clue, *verb), answer.to_string());
        }
        store
    }

    #[test]
    fn test_weight_of_fresh_stats_is_one() {
        assert_eq!(PromptStats::default().weight(), 1.0);
    }

    #[test]
    fn test_weight_strictly_decreases_with_streak() {
        for streak in 0..500u16 {
            let here = PromptStats::new(streak, 0, 0).weight();
            let next = PromptStats::new(streak + 1, 0, 0).weight();
            assert!(here > next, "weight({streak}) should exceed weight({})", streak + 1);
            assert!(next > 0.0);
        }
    }

    #[test]
    fn test_insert_adds_unit_weight() {
        let store = store_with(&[("1sg", "run", "run"), ("3sg", "run", "runs")]);
        assert_eq!(store.len(), 2);
        assert!((store.total_weight() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_insert_rejects_duplicate_prompt() {
        let mut store = store_with(&[("1sg", "run", "run")]);
        assert!(!store.insert(Prompt::new("1sg", "run"), "ran".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.answer(&Prompt::new("1sg", "run")), Some("run"));
        assert!((store.total_weight() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_continue_streak_counts_correct_answer() {
        let mut store = store_with(&[("1sg", "run", "run")]);
        let p = Prompt::new("1sg", "run");
        store.continue_streak(&p);
        let stats = store.continue_streak(&p).unwrap();
        assert_eq!(stats, PromptStats::new(2, 2, 0));
        assert!((store.total_weight() - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_end_streak_resets_streak_and_counts_mistake() {
        let mut store = store_with(&[("1sg", "run", "run")]);
        let p = Prompt::new("1sg", "run");
        store.continue_streak(&p);
        store.continue_streak(&p);
        let stats = store.end_streak(&p).unwrap();
        assert_eq!(stats, PromptStats::new(0, 2, 1));
        assert!((store.total_weight() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_prompt_is_not_mutated() {
        let mut store = store_with(&[("1sg", "run", "run")]);
        let missing = Prompt::new("2sg", "run");
        assert_eq!(store.continue_streak(&missing), None);
        assert_eq!(store.end_streak(&missing), None);
        assert_eq!(store.update_stats(&missing, PromptStats::new(3, 3, 0)), None);
        assert!(!store.contains(&missing));
        assert!((store.total_weight() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_total_weight_tracks_recomputed_sum() {
        let mut store = store_with(&[
            ("1sg", "run", "run"),
            ("2sg", "run", "run"),
            ("3sg", "run", "runs"),
            ("1sg", "be", "am"),
        ]);
        let prompts: Vec<Prompt> = store.prompts().to_vec();
        // Deterministic pseudo-random walk over both transitions.
        let mut state: u32 = 0x2545_f491;
        for _ in 0..5_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let prompt = &prompts[state as usize % prompts.len()];
            if state % 3 == 0 {
                store.end_streak(prompt);
            } else {
                store.continue_streak(prompt);
            }
            assert!(
                (store.total_weight() - store.recomputed_weight()).abs() < 1e-6,
                "incremental {} drifted from recomputed {}",
                store.total_weight(),
                store.recomputed_weight()
            );
        }
    }

    #[test]
    fn test_counters_saturate() {
        let mut store = store_with(&[("1sg", "run", "run")]);
        let p = Prompt::new("1sg", "run");
        store.update_stats(&p, PromptStats::new(u16::MAX, u16::MAX, u16::MAX));
        assert_eq!(store.continue_streak(&p), Some(PromptStats::new(u16::MAX, u16::MAX, u16::MAX)));
        assert_eq!(store.end_streak(&p), Some(PromptStats::new(0, u16::MAX, u16::MAX)));
    }

    #[test]
    fn test_iter_follows_insertion_order() {
        let store = store_with(&[("3sg", "run", "runs"), ("1sg", "run", "run")]);
        let clues: Vec<&str> = store.iter().map(|(p, _)| p.clue()).collect();
        assert_eq!(clues, vec!["3sg", "1sg"]);
    }

    #[test]
    fn test_longest_answer_counts_chars() {
        assert_eq!(StatisticsStore::new().longest_answer(), 0);
        let store = store_with(&[("yo", "ir", "voy"), ("ellos", "traer", "traigàn")]);
        assert_eq!(store.longest_answer(), 7);
    }
}
