// src/scoring/mod.rs

pub mod calibration;
pub mod distance;
pub mod scorer;

pub use calibration::Calibration;
pub use scorer::Scorer;
