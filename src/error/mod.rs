// src/error/mod.rs
//
// Error types

pub mod types;

pub use types::{AppError, AppResult};
