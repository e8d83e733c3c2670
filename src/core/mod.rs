// src/core/mod.rs

pub mod embedding;
pub mod engine;
pub mod lexicon;
pub mod types;
pub mod validator;
