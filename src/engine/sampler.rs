use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::engine::prompt::Prompt;
use crate::engine::stats::StatisticsStore;

/// Draws allowed before a run of floating-point misses is treated as a bug.
pub const MAX_DRAW_ATTEMPTS: usize = 1000;

/// A prompt and the answer it expected when it was drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: Prompt,
    pub correct_answer: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("no prompts to draw from")]
    Empty,
    #[error("weighted draw missed every prompt {attempts} times in a row")]
    Exhausted { attempts: usize },
}

/// Weighted random choice over a [`StatisticsStore`].
pub struct QuestionSampler<R = SmallRng> {
    rng: R,
}

impl QuestionSampler<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> QuestionSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a prompt with probability proportional to its weight.
    ///
    /// When accumulated rounding makes a draw walk past the last prompt the
    /// draw is repeated with a fresh value, up to [`MAX_DRAW_ATTEMPTS`] times.
    pub fn draw(&mut self, store: &StatisticsStore) -> Result<Question, SampleError> {
        let total = store.total_weight();
        if store.is_empty() || !total.is_finite() || total <= 0.0 {
            return Err(SampleError::Empty);
        }

        for attempt in 1..=MAX_DRAW_ATTEMPTS {
            let r = self.rng.gen_range(0.0..total);
            if let Some(prompt) = select(store, r) {
                let correct_answer = store.answer(prompt).unwrap_or_default().to_string();
                return Ok(Question {
                    prompt: prompt.clone(),
                    correct_answer,
                });
            }
            tracing::warn!(attempt, r, total, "weighted draw missed every prompt, redrawing");
        }

        Err(SampleError::Exhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }
}

/// Walks the store in catalog order, subtracting each weight from `r`, and
/// returns the prompt at which `r` drops to zero or below. None means the
/// weights summed to less than `r`.
pub fn select(store: &StatisticsStore, mut r: f64) -> Option<&Prompt> {
    for (prompt, stats) in store.iter() {
        r -= stats.weight();
        if r <= 0.0 {
            return Some(prompt);
        }
    }
    None
}
