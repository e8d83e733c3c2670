// File: src/core/lexicon.rs
use crate::core::types::RowIndex;
use crate::error::{DatError, Result};
use std::collections::HashMap;

/// Canonical word forms in matrix row order, plus the surface-form mapping.
///
/// Lookups are O(1): lemmas and forms are both hashed straight to a row.
#[derive(Debug, Clone)]
pub struct Lexicon {
    lemmas: Vec<String>,
    rows: HashMap<String, RowIndex>,
    /// Surface form -> row of its lemma. Many-to-one.
    forms: HashMap<String, RowIndex>,
}

/// Lowercases, trims and folds "ё" into "е".
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase().replace('ё', "е")
}

fn ensure_folded(kind: &str, entry: &str) -> Result<()> {
    let folded = fold(entry);
    if folded != entry {
        return Err(DatError::MalformedDictionary {
            reason: format!("{} '{}' is not normalized (expected '{}')", kind, entry, folded),
        });
    }
    Ok(())
}

impl Lexicon {
    /// Builds the lexicon. Row `k` is the `k`-th entry of `lemmas`.
    ///
    /// Lemmas and form keys must already be in folded form; anything else
    /// could never be reached through `normalize`.
    pub fn load(lemmas: Vec<String>, forms: HashMap<String, String>) -> Result<Self> {
        let mut rows = HashMap::with_capacity(lemmas.len());
        for (row, lemma) in lemmas.iter().enumerate() {
            ensure_folded("lemma", lemma)?;
            if let Some(first) = rows.insert(lemma.clone(), row) {
                return Err(DatError::MalformedDictionary {
                    reason: format!("duplicate lemma '{}' at rows {} and {}", lemma, first, row),
                });
            }
        }

        let mut form_rows = HashMap::with_capacity(forms.len());
        for (form, lemma) in forms {
            ensure_folded("form", &form)?;
            let row = *rows.get(&lemma).ok_or_else(|| DatError::MalformedDictionary {
                reason: format!("form '{}' maps to unknown lemma '{}'", form, lemma),
            })?;
            form_rows.insert(form, row);
        }

        Ok(Self { lemmas, rows, forms: form_rows })
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.rows.contains_key(lemma)
    }

    pub fn row_of(&self, lemma: &str) -> Option<RowIndex> {
        self.rows.get(lemma).copied()
    }

    pub fn lemma_at(&self, row: RowIndex) -> Option<&str> {
        self.lemmas.get(row).map(String::as_str)
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Iterates `(surface form, lemma)` pairs in no particular order.
    pub fn forms(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.forms
            .iter()
            .map(move |(form, &row)| (form.as_str(), self.lemmas[row].as_str()))
    }

    /// Resolves user text to its lemma.
    ///
    /// The folded text wins if it is itself a lemma; otherwise the form map
    /// is consulted. No stemming or punctuation stripping happens here.
    pub fn normalize(&self, raw: &str) -> Option<&str> {
        let word = fold(raw);
        let row = self.rows.get(&word).or_else(|| self.forms.get(&word))?;
        Some(self.lemmas[*row].as_str())
    }
}
