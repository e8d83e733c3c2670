// File: src/session/mod.rs
pub mod countdown;

use crate::core::engine::Engine;
use crate::core::types::ScoringResult;
use crate::core::validator::ValidationOutcome;
use crate::error::{DatError, Result};

pub use countdown::{Countdown, Phase};

/// One input slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEntry {
    pub raw: String,
    /// Lemma the raw text resolves to, whether or not it was accepted.
    pub lemma: Option<String>,
    pub outcome: ValidationOutcome,
}

impl Default for CandidateEntry {
    fn default() -> Self {
        Self { raw: String::new(), lemma: None, outcome: ValidationOutcome::Empty }
    }
}

/// The slots of a single attempt. Nothing survives `reset`.
#[derive(Debug, Clone)]
pub struct Attempt {
    slots: Vec<CandidateEntry>,
}

impl Attempt {
    pub fn new(slot_count: usize) -> Self {
        Self { slots: vec![CandidateEntry::default(); slot_count] }
    }

    pub fn slots(&self) -> &[CandidateEntry] {
        &self.slots
    }

    /// Index of the first slot with no text.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.raw.trim().is_empty())
    }

    /// Replaces the text of `slot` and re-validates every slot, since a
    /// change in one can create or clear a duplicate in another.
    pub fn edit(&mut self, slot: usize, raw: &str, engine: &Engine) -> Result<()> {
        let len = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(DatError::IndexOutOfRange { index: slot, len })?;
        entry.raw = raw.to_string();
        self.revalidate(engine);
        Ok(())
    }

    fn revalidate(&mut self, engine: &Engine) {
        let lemmas: Vec<Option<String>> = self
            .slots
            .iter()
            .map(|slot| engine.normalize(&slot.raw).map(str::to_string))
            .collect();

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let others = lemmas
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .filter_map(|(_, lemma)| lemma.as_deref());
            slot.outcome = engine.validate(&slot.raw, others);
            slot.lemma = lemmas[index].clone();
        }
    }

    /// Distinct lemmas in slot order, the same list scoring draws from.
    pub fn valid_lemmas(&self, engine: &Engine) -> Vec<String> {
        engine.collect_valid_lemmas(self.slots.iter().map(|slot| slot.raw.as_str()))
    }

    pub fn can_submit(&self, engine: &Engine) -> bool {
        self.valid_lemmas(engine).len() >= engine.scorer().word_count()
    }

    pub fn submit(&self, engine: &Engine) -> Result<ScoringResult> {
        engine.score(&self.valid_lemmas(engine))
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = CandidateEntry::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::embedding::EmbeddingStore;
    use crate::core::lexicon::Lexicon;
    use crate::core::types::EMBEDDING_DIM;
    use crate::scoring::Scorer;
    use std::collections::HashMap;

    const WORDS: [&str; 8] = ["кот", "пес", "чай", "дом", "лес", "нос", "сон", "мир"];

    fn engine() -> Engine {
        let lexicon = Lexicon::load(
            WORDS.iter().map(|s| s.to_string()).collect(),
            HashMap::from([("коты".to_string(), "кот".to_string())]),
        )
        .unwrap();
        let rows: Vec<Vec<i8>> = (0..WORDS.len())
            .map(|k| {
                let mut row = vec![0i8; EMBEDDING_DIM];
                row[k] = 1;
                row
            })
            .collect();
        let store = EmbeddingStore::load(EmbeddingStore::encode(&rows).unwrap()).unwrap();
        Engine::from_parts(lexicon, store, Scorer::default()).unwrap()
    }

    #[test]
    fn duplicates_follow_the_other_slots() {
        let engine = engine();
        let mut attempt = Attempt::new(10);
        attempt.edit(0, "кот", &engine).unwrap();
        attempt.edit(1, "Коты", &engine).unwrap();
        assert_eq!(attempt.slots()[1].outcome, ValidationOutcome::Duplicate("кот".to_string()));
        assert_eq!(attempt.slots()[0].outcome, ValidationOutcome::Duplicate("кот".to_string()));

        attempt.edit(0, "пес", &engine).unwrap();
        assert_eq!(attempt.slots()[1].outcome, ValidationOutcome::Accepted("кот".to_string()));
        assert_eq!(attempt.slots()[1].lemma.as_deref(), Some("кот"));
    }

    #[test]
    fn submit_needs_seven_distinct() {
        let engine = engine();
        let mut attempt = Attempt::new(10);
        for (slot, word) in ["кот", "коты", "пес", "чай", "дом", "лес", "нос"].iter().enumerate() {
            attempt.edit(slot, word, &engine).unwrap();
        }
        assert!(!attempt.can_submit(&engine));
        assert!(matches!(attempt.submit(&engine), Err(DatError::InsufficientWords { .. })));

        let slot = attempt.first_empty().unwrap();
        assert_eq!(slot, 7);
        attempt.edit(slot, "сон", &engine).unwrap();
        assert!(attempt.can_submit(&engine));
        let result = attempt.submit(&engine).unwrap();
        assert_eq!(result.words, vec!["кот", "пес", "чай", "дом", "лес", "нос", "сон"]);
    }

    #[test]
    fn reset_clears_everything() {
        let engine = engine();
        let mut attempt = Attempt::new(3);
        attempt.edit(2, "мир", &engine).unwrap();
        attempt.reset();
        assert!(attempt.slots().iter().all(|slot| *slot == CandidateEntry::default()));
        assert_eq!(attempt.first_empty(), Some(0));
    }

    #[test]
    fn edit_out_of_range() {
        let engine = engine();
        let mut attempt = Attempt::new(3);
        assert!(matches!(
            attempt.edit(3, "мир", &engine),
            Err(DatError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }
}
