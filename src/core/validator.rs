// File: src/core/validator.rs
use crate::core::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-slot verdict on what the user typed. These are ordinary UI states,
/// re-computed on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    Empty,
    /// Latin letters present.
    ContainsNonCyrillic,
    /// Whitespace inside the word.
    MultipleWords,
    /// Anything other than Cyrillic letters and hyphen.
    InvalidCharacters,
    UnknownWord,
    /// Resolves to a lemma another slot already holds.
    Duplicate(String),
    Accepted(String),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn lemma(&self) -> Option<&str> {
        match self {
            Self::Accepted(lemma) | Self::Duplicate(lemma) => Some(lemma),
            _ => None,
        }
    }

    /// Short user-facing message; empty for neutral and accepted states.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty | Self::Accepted(_) => "",
            Self::ContainsNonCyrillic => "Только русские буквы",
            Self::MultipleWords => "Одно слово",
            Self::InvalidCharacters => "Только буквы",
            Self::UnknownWord => "Нет в словаре",
            Self::Duplicate(_) => "Повтор",
        }
    }
}

fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Classifies one raw input against the lexicon and the lemmas held by the
/// other slots.
pub fn validate<'a, I>(lexicon: &Lexicon, raw: &str, others: I) -> ValidationOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let word = raw.trim();
    if word.is_empty() {
        return ValidationOutcome::Empty;
    }
    if word.chars().any(|c| c.is_ascii_alphabetic()) {
        return ValidationOutcome::ContainsNonCyrillic;
    }
    if word.chars().any(char::is_whitespace) {
        return ValidationOutcome::MultipleWords;
    }
    if !word.chars().all(|c| is_cyrillic_letter(c) || c == '-') {
        return ValidationOutcome::InvalidCharacters;
    }

    let Some(lemma) = lexicon.normalize(word) else {
        return ValidationOutcome::UnknownWord;
    };
    if others.into_iter().any(|other| other == lemma) {
        return ValidationOutcome::Duplicate(lemma.to_string());
    }
    ValidationOutcome::Accepted(lemma.to_string())
}

/// Distinct lemmas of `entries`, first occurrence wins, slot order kept.
///
/// Scoring takes the leading lemmas of this list, so the order matters.
pub fn collect_valid_lemmas<'a, I>(lexicon: &Lexicon, entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for entry in entries {
        if let Some(lemma) = lexicon.normalize(entry) {
            if seen.insert(lemma) {
                result.push(lemma.to_string());
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const NONE: [&str; 0] = [];

    fn lexicon() -> Lexicon {
        let lemmas = ["кот", "пес", "ежик", "чай", "во-первых"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let forms = HashMap::from([
            ("коты".to_string(), "кот".to_string()),
            ("кота".to_string(), "кот".to_string()),
        ]);
        Lexicon::load(lemmas, forms).unwrap()
    }

    #[test]
    fn latin_input_is_rejected_regardless_of_dictionary() {
        let lex = lexicon();
        assert_eq!(validate(&lex, "dog", NONE), ValidationOutcome::ContainsNonCyrillic);
        assert_eq!(validate(&lex, "котdog", NONE), ValidationOutcome::ContainsNonCyrillic);
    }

    #[test]
    fn check_order() {
        let lex = lexicon();
        assert_eq!(validate(&lex, "   ", NONE), ValidationOutcome::Empty);
        assert_eq!(validate(&lex, "кот пес", NONE), ValidationOutcome::MultipleWords);
        assert_eq!(validate(&lex, "кот1", NONE), ValidationOutcome::InvalidCharacters);
        assert_eq!(validate(&lex, "кот!", NONE), ValidationOutcome::InvalidCharacters);
        assert_eq!(validate(&lex, "собака", NONE), ValidationOutcome::UnknownWord);
    }

    #[test]
    fn hyphen_and_yo_are_allowed() {
        let lex = lexicon();
        assert_eq!(
            validate(&lex, "Во-первых", NONE),
            ValidationOutcome::Accepted("во-первых".to_string())
        );
        assert_eq!(validate(&lex, "ЁЖИК", NONE), ValidationOutcome::Accepted("ежик".to_string()));
    }

    #[test]
    fn duplicates_compare_lemmas_not_text() {
        let lex = lexicon();
        let outcome = validate(&lex, "Коты", ["пес", "кот"]);
        assert_eq!(outcome, ValidationOutcome::Duplicate("кот".to_string()));
        assert_eq!(outcome.message(), "Повтор");
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.lemma(), Some("кот"));
    }

    #[test]
    fn collect_keeps_first_occurrence_in_slot_order() {
        let lex = lexicon();
        let lemmas = collect_valid_lemmas(&lex, ["кот", "кот", "пес", "", "dog", "коты", "чай"]);
        assert_eq!(lemmas, vec!["кот", "пес", "чай"]);
    }
}
