// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a lemma's vector within the embedding matrix.
pub type RowIndex = usize;

/// Fixed component count of every embedding row.
pub const EMBEDDING_DIM: usize = 300;

/// Size of the matrix header: `u32 num_words`, `u32 dim`, both little-endian.
pub const MATRIX_HEADER_LEN: usize = 8;

/// Number of lemmas that take part in a score.
pub const SCORE_WORD_COUNT: usize = 7;

/// Distance between two of the scored words.
/// `i` and `j` are positions within the scored set (`i < j`), not matrix rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Outcome of one scoring call. Owned by whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// The lemmas actually scored, in slot order.
    pub words: Vec<String>,
    /// Every unordered pair, in `(0,1), (0,2), .., (5,6)` order.
    pub distances: Vec<PairDistance>,
    /// Mean pairwise distance on a 0-100 scale.
    pub raw_score: f64,
    pub calibrated_score: f64,
}

impl ScoringResult {
    /// Full symmetric distance matrix with a zero diagonal.
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.words.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for pair in &self.distances {
            matrix[pair.i][pair.j] = pair.distance;
            matrix[pair.j][pair.i] = pair.distance;
        }
        matrix
    }
}
