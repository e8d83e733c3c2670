// File: src/core/embedding.rs
use crate::core::types::{RowIndex, EMBEDDING_DIM, MATRIX_HEADER_LEN};
use crate::error::{DatError, Result};
use tracing::info;

/// Row-major `num_words x dim` matrix of signed 8-bit components.
///
/// The store keeps the raw file buffer (header included) and hands out
/// borrowed row views; nothing is copied after `load`.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    buffer: Vec<u8>,
    num_words: usize,
    dim: usize,
}

fn header_row_count(rows: usize) -> Result<u32> {
    u32::try_from(rows).map_err(|_| DatError::TooManyRows { actual: rows, max: u32::MAX as usize })
}

impl EmbeddingStore {
    /// Parses a matrix file.
    ///
    /// Layout: `u32 num_words` (LE), `u32 dim` (LE), then exactly
    /// `num_words * dim` `i8` values. Trailing bytes are rejected.
    pub fn load(buffer: Vec<u8>) -> Result<Self> {
        if buffer.len() < MATRIX_HEADER_LEN {
            return Err(DatError::TruncatedHeader { actual: buffer.len() });
        }
        let num_words = u32::from_le_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]) as usize;
        let dim = u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]) as usize;

        if dim != EMBEDDING_DIM {
            return Err(DatError::DimensionMismatch { expected: EMBEDDING_DIM, actual: dim });
        }

        let payload = buffer.len() - MATRIX_HEADER_LEN;
        let expected = num_words.checked_mul(dim).ok_or(DatError::SizeMismatch {
            expected: usize::MAX,
            actual: payload,
        })?;
        if payload != expected {
            return Err(DatError::SizeMismatch { expected, actual: payload });
        }

        info!(num_words, dim, "embedding matrix loaded");
        Ok(Self { buffer, num_words, dim })
    }

    /// Serializes rows into the on-disk matrix layout.
    pub fn encode(rows: &[Vec<i8>]) -> Result<Vec<u8>> {
        let num_words = header_row_count(rows.len())?;
        let mut out = Vec::with_capacity(MATRIX_HEADER_LEN + rows.len() * EMBEDDING_DIM);
        out.extend_from_slice(&num_words.to_le_bytes());
        out.extend_from_slice(&(EMBEDDING_DIM as u32).to_le_bytes());
        for row in rows {
            if row.len() != EMBEDDING_DIM {
                return Err(DatError::DimensionMismatch { expected: EMBEDDING_DIM, actual: row.len() });
            }
            out.extend_from_slice(bytemuck::cast_slice::<i8, u8>(row.as_slice()));
        }
        Ok(out)
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The full buffer as it would be written to disk.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Borrowed view of one row.
    pub fn vector(&self, row: RowIndex) -> Result<&[i8]> {
        if row >= self.num_words {
            return Err(DatError::IndexOutOfRange { index: row, len: self.num_words });
        }
        let start = MATRIX_HEADER_LEN + row * self.dim;
        Ok(bytemuck::cast_slice(&self.buffer[start..start + self.dim]))
    }
}
