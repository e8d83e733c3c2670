// File: src/report.rs
//! Display helpers over a [`ScoringResult`]. Pure data, no terminal I/O.

use crate::core::types::ScoringResult;

/// Score bands on the calibrated scale. The random-set median sits near 78.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    BelowAverage,
    SlightlyBelowAverage,
    AboveAverage,
    Excellent,
    Exceptional,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score < 60.0 {
            Self::Low
        } else if score < 70.0 {
            Self::BelowAverage
        } else if score < 78.0 {
            Self::SlightlyBelowAverage
        } else if score < 83.0 {
            Self::AboveAverage
        } else if score < 90.0 {
            Self::Excellent
        } else {
            Self::Exceptional
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Низкий балл. Слова слишком связаны между собой.",
            Self::BelowAverage => "Ниже среднего. Есть куда расти.",
            Self::SlightlyBelowAverage => "Чуть ниже среднего. Неплохо!",
            Self::AboveAverage => "Выше среднего! Хорошее дивергентное мышление.",
            Self::Excellent => "Отлично! Высокая вербальная креативность.",
            Self::Exceptional => "Исключительно! Такие баллы — редкость.",
        }
    }
}

/// Marker position in percent on a 0..110 score scale.
pub fn scale_position(score: f64) -> f64 {
    (score / 110.0 * 100.0).clamp(0.0, 100.0)
}

const CLOSE_RGB: (f64, f64, f64) = (40.0, 20.0, 80.0);
const FAR_RGB: (f64, f64, f64) = (0.0, 184.0, 148.0);

/// Pairwise distances laid out as a square, with min/max taken over the
/// off-diagonal cells for colouring.
#[derive(Debug, Clone)]
pub struct Heatmap {
    pub words: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub min: f64,
    pub max: f64,
}

impl Heatmap {
    pub fn from_result(result: &ScoringResult) -> Self {
        let (min, max) = result
            .distances
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), pair| {
                (lo.min(pair.distance), hi.max(pair.distance))
            });
        Self {
            words: result.words.clone(),
            matrix: result.distance_matrix(),
            min,
            max,
        }
    }

    /// Distance rescaled to 0..1 across the set; 0.5 if all pairs are equal.
    pub fn intensity(&self, i: usize, j: usize) -> f64 {
        if self.max > self.min {
            (self.matrix[i][j] - self.min) / (self.max - self.min)
        } else {
            0.5
        }
    }

    /// Dark purple for close pairs, green for distant ones.
    pub fn color(&self, i: usize, j: usize) -> (u8, u8, u8) {
        let t = self.intensity(i, j);
        let lerp = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
        (
            lerp(CLOSE_RGB.0, FAR_RGB.0),
            lerp(CLOSE_RGB.1, FAR_RGB.1),
            lerp(CLOSE_RGB.2, FAR_RGB.2),
        )
    }

    /// Light cells get dark text.
    pub fn dark_text(&self, i: usize, j: usize) -> bool {
        self.intensity(i, j) > 0.5
    }

    /// Column header, shortened to six characters plus "..." past seven.
    pub fn short_label(word: &str) -> String {
        if word.chars().count() > 7 {
            format!("{}...", word.chars().take(6).collect::<String>())
        } else {
            word.to_string()
        }
    }
}
