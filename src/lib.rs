// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod report;
pub mod scoring;
pub mod session;

pub use crate::config::DatConfig;
pub use crate::core::engine::Engine;
pub use crate::core::types::ScoringResult;
pub use crate::core::validator::ValidationOutcome;
pub use crate::error::{DatError, Result};
