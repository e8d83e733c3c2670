// File: src/scoring/scorer.rs
use crate::core::embedding::EmbeddingStore;
use crate::core::lexicon::Lexicon;
use crate::core::types::{PairDistance, ScoringResult, SCORE_WORD_COUNT};
use crate::error::{DatError, Result};
use crate::scoring::calibration::Calibration;
use crate::scoring::distance::cosine_distance;
use std::collections::HashSet;
use tracing::debug;

/// Turns the leading distinct lemmas into a divergence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    calibration: Calibration,
    word_count: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self { calibration: Calibration::default(), word_count: SCORE_WORD_COUNT }
    }
}

impl Scorer {
    /// Fewer than two words leaves no pair to average over.
    pub fn new(calibration: Calibration, word_count: usize) -> Result<Self> {
        if word_count < 2 {
            return Err(DatError::Config {
                message: format!("scorer word_count must be at least 2, got {}", word_count),
            });
        }
        Ok(Self { calibration, word_count })
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Scores the first `word_count` distinct lemmas of `lemmas`.
    ///
    /// Every unordered pair contributes its cosine distance; the raw score is
    /// their mean times 100, then calibrated.
    pub fn score<S: AsRef<str>>(
        &self,
        lexicon: &Lexicon,
        store: &EmbeddingStore,
        lemmas: &[S],
    ) -> Result<ScoringResult> {
        let mut seen = HashSet::new();
        let words: Vec<&str> = lemmas
            .iter()
            .map(|lemma| lemma.as_ref())
            .filter(|lemma| seen.insert(*lemma))
            .take(self.word_count)
            .collect();
        if words.len() < self.word_count {
            return Err(DatError::InsufficientWords {
                required: self.word_count,
                actual: words.len(),
            });
        }

        let vectors = words
            .iter()
            .map(|lemma| {
                let row = lexicon
                    .row_of(lemma)
                    .ok_or_else(|| DatError::UnknownLemma(lemma.to_string()))?;
                store.vector(row)
            })
            .collect::<Result<Vec<&[i8]>>>()?;

        let mut distances = Vec::with_capacity(vectors.len() * vectors.len().saturating_sub(1) / 2);
        let mut total = 0.0;
        for i in 0..vectors.len() {
            for j in i + 1..vectors.len() {
                let distance = cosine_distance(vectors[i], vectors[j]);
                total += distance;
                distances.push(PairDistance { i, j, distance });
            }
        }

        let raw_score = 100.0 * (total / distances.len() as f64);
        let calibrated_score = self.calibration.apply(raw_score);
        debug!(
            raw_score,
            calibrated_score,
            calibration = self.calibration.name(),
            "scored word set"
        );

        Ok(ScoringResult {
            words: words.into_iter().map(str::to_string).collect(),
            distances,
            raw_score,
            calibrated_score,
        })
    }
}
