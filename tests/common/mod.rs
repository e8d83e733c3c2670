// Shared toy fixture: 50 lemmas with deterministic integer vectors.
#![allow(dead_code)]

use dat_core::core::embedding::EmbeddingStore;
use dat_core::core::lexicon::Lexicon;
use dat_core::core::types::EMBEDDING_DIM;
use dat_core::scoring::Scorer;
use dat_core::Engine;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const WORDS: [&str; 50] = [
    "арбуз", "башня", "ветер", "гора", "дождь", "ежик", "жираф", "замок", "игла", "йогурт",
    "кактус", "лампа", "молоко", "носок", "облако", "пальто", "ракета", "сахар", "трава", "улитка",
    "фонарь", "хлеб", "цирк", "чайник", "шапка", "щетка", "экран", "юбка", "якорь", "бочка",
    "вилка", "гитара", "дверь", "елка", "зебра", "книга", "лодка", "мост", "нитка", "окно",
    "перо", "река", "свеча", "труба", "утюг", "флаг", "холм", "цепь", "чернила", "шахта",
];

pub const FORMS: [(&str, &str); 6] = [
    ("горы", "гора"),
    ("лампы", "лампа"),
    ("ежики", "ежик"),
    ("елки", "елка"),
    ("свечи", "свеча"),
    ("шапки", "шапка"),
];

pub fn vector(k: usize) -> Vec<i8> {
    (0..EMBEDDING_DIM)
        .map(|d| (((k * 131 + d * 71 + (k * d) % 97) % 190) as i32 - 62) as i8)
        .collect()
}

pub fn lexicon() -> Lexicon {
    let forms = FORMS
        .iter()
        .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
        .collect();
    Lexicon::load(WORDS.iter().map(|w| w.to_string()).collect(), forms).unwrap()
}

pub fn matrix_bytes() -> Vec<u8> {
    let rows: Vec<Vec<i8>> = (0..WORDS.len()).map(vector).collect();
    EmbeddingStore::encode(&rows).unwrap()
}

pub fn engine(scorer: Scorer) -> Engine {
    let store = EmbeddingStore::load(matrix_bytes()).unwrap();
    Engine::from_parts(lexicon(), store, scorer).unwrap()
}

/// Writes words.json, forms.json and matrix.bin into `dir`.
pub fn write_assets(dir: &Path) {
    let forms: HashMap<&str, &str> = FORMS.iter().copied().collect();
    fs::write(dir.join("words.json"), serde_json::to_vec(&WORDS[..]).unwrap()).unwrap();
    fs::write(dir.join("forms.json"), serde_json::to_vec(&forms).unwrap()).unwrap();
    fs::write(dir.join("matrix.bin"), matrix_bytes()).unwrap();
}

/// Rows 3, 11, 17, 24, 31, 42, 49.
pub const SCORED: [&str; 7] = ["гора", "лампа", "сахар", "шапка", "гитара", "свеча", "шахта"];

/// Pair distances for `SCORED`, in (0,1), (0,2), .., (5,6) order.
pub const GOLDEN_DISTANCES: [f64; 21] = [
    0.9364643278455147,
    0.7914305062143212,
    0.8333925087059273,
    0.7993619918959576,
    0.5948618234773682,
    0.8323478524242285,
    0.6099712252217968,
    0.557698954818528,
    0.701119145941381,
    0.8458460264557812,
    0.6471129519468382,
    0.6838758898099551,
    0.8303258693871135,
    0.7329974322449966,
    0.5442592459196094,
    0.6237033105225348,
    0.8772890952219541,
    0.6904553313614491,
    0.9007632424542406,
    0.9074703310146471,
    0.6615450455385863,
];
pub const GOLDEN_SUM: f64 = 15.602292108422729;
pub const GOLDEN_RAW: f64 = 74.29662908772728;
pub const GOLDEN_POWER_LAW: f64 = 65.88961437588273;
