// src/lib.rs
// blogstore - embedded data-access layer for blog posts
//
// Architecture:
// - One entity (BlogPost), one repository contract, one SQLite implementation
// - Repositories are dumb data mappers: explicit SQL, no business logic
// - The store handle is an injected dependency; the real store and a test
//   double implement the same contract
// - Explicit: no implicit behavior, no magic

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use domain::BlogPost;

pub use error::{AppError, AppResult};

pub use repositories::{BlogRepository, SaveOutcome, SqliteBlogRepository};
