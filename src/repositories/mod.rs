// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond predicate/pagination construction
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod blog_repository;
pub mod sqlite_blog_repository;


pub use blog_repository::{BlogRepository, SaveOutcome};
pub use sqlite_blog_repository::SqliteBlogRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
