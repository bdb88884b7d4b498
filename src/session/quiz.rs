use icu_normalizer::ComposingNormalizerBorrowed;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::engine::sampler::{Question, QuestionSampler, SampleError};
use crate::engine::stats::{PromptStats, StatisticsStore};

/// Result of checking one submitted answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub submitted: String,
    /// The prompt's stats after the answer was recorded.
    pub stats: PromptStats,
}

/// One drill session: the statistics it updates, the current question and
/// counters for this run only.
pub struct QuizSession<R = SmallRng> {
    store: StatisticsStore,
    sampler: QuestionSampler<R>,
    question: Question,
    answered: bool,
    correct_answers: u32,
    wrong_answers: u32,
    streak: u32,
}

impl<R: Rng> QuizSession<R> {
    pub fn start(store: StatisticsStore, mut sampler: QuestionSampler<R>) -> Result<Self, SampleError> {
        let question = sampler.draw(&store)?;
        tracing::debug!(prompt = %question.prompt, "first question");
        Ok(Self {
            store,
            sampler,
            question,
            answered: false,
            correct_answers: 0,
            wrong_answers: 0,
            streak: 0,
        })
    }

    /// Checks and records an answer for the current question. Returns None if
    /// the question was already answered.
    pub fn submit(&mut self, answer: &str) -> Option<Verdict> {
        if self.answered {
            return None;
        }
        let prompt = &self.question.prompt;
        let correct = answers_match(&self.question.correct_answer, answer);
        let stats = if correct {
            self.correct_answers += 1;
            self.streak += 1;
            self.store.continue_streak(prompt)
        } else {
            self.wrong_answers += 1;
            self.streak = 0;
            self.store.end_streak(prompt)
        }
        .unwrap_or_default();
        self.answered = true;

        tracing::info!(
            prompt = %prompt,
            correct,
            weight = stats.weight(),
            "answer recorded"
        );
        Some(Verdict {
            correct,
            submitted: answer.to_string(),
            stats,
        })
    }

    /// Moves on to a new question once the current one has been answered.
    pub fn advance(&mut self) -> Result<(), SampleError> {
        if !self.answered {
            return Ok(());
        }
        self.question = self.sampler.draw(&self.store)?;
        self.answered = false;
        tracing::debug!(prompt = %self.question.prompt, "new question");
        Ok(())
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// 1-based number of the question on screen.
    pub fn question_number(&self) -> u32 {
        let done = self.correct_answers + self.wrong_answers;
        if self.answered { done } else { done + 1 }
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn store(&self) -> &StatisticsStore {
        &self.store
    }

    /// Stats of the current question's prompt.
    pub fn question_stats(&self) -> PromptStats {
        self.store.get(&self.question.prompt).unwrap_or_default()
    }
}

/// Compares answers ignoring surrounding whitespace and Unicode composition,
/// so a decomposed "é" typed by some input methods still matches.
pub fn answers_match(expected: &str, submitted: &str) -> bool {
    let nfc = ComposingNormalizerBorrowed::new_nfc();
    nfc.normalize(expected.trim()) == nfc.normalize(submitted.trim())
}
