use crate::core::embedding::EmbeddingStore;
use crate::core::lexicon::Lexicon;
use crate::core::types::ScoringResult;
use crate::core::validator::{self, ValidationOutcome};
use crate::error::{DatError, Result};
use crate::scoring::scorer::Scorer;
use tracing::info;

// The engine is composed of the loaded assets and the scoring policy.
// It holds no per-attempt state; callers own their slots and pass them in.
#[derive(Debug, Clone)]
pub struct Engine {
    lexicon: Lexicon,
    store: EmbeddingStore,
    scorer: Scorer,
}

impl Engine {
    /// Bundles loaded assets. Lexicon row `k` must describe matrix row `k`.
    pub fn from_parts(lexicon: Lexicon, store: EmbeddingStore, scorer: Scorer) -> Result<Self> {
        if lexicon.len() != store.num_words() {
            return Err(DatError::RowCountMismatch {
                lemmas: lexicon.len(),
                rows: store.num_words(),
            });
        }
        info!(
            lemmas = lexicon.len(),
            calibration = scorer.calibration().name(),
            "engine ready"
        );
        Ok(Self { lexicon, store, scorer })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn normalize(&self, raw: &str) -> Option<&str> {
        self.lexicon.normalize(raw)
    }

    pub fn validate<'a, I>(&self, raw: &str, others: I) -> ValidationOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        validator::validate(&self.lexicon, raw, others)
    }

    pub fn collect_valid_lemmas<'a, I>(&self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        validator::collect_valid_lemmas(&self.lexicon, entries)
    }

    pub fn score<S: AsRef<str>>(&self, lemmas: &[S]) -> Result<ScoringResult> {
        self.scorer.score(&self.lexicon, &self.store, lemmas)
    }
}
