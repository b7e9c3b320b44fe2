// src/repositories/blog_repository.rs
//
// Blog post persistence contract

use crate::domain::blog::BlogPost;
use crate::error::AppResult;

#[cfg(test)]
use mockall::automock;

/// Whether a save inserted a new row or rewrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Data-access contract for blog posts.
///
/// The store handle behind an implementation is an injected, swappable
/// dependency: the real SQLite repository and a test double implement the
/// same contract. Each operation is a single synchronous request/response
/// exchange with the store; store errors pass through unchanged.
#[cfg_attr(test, automock)]
pub trait BlogRepository: Send + Sync {
    /// Fetch one post by id. Yields `AppError::NotFound` when no row
    /// matches; never substitutes a default record.
    fn load(&self, id: u32) -> AppResult<BlogPost>;

    /// Every persisted post, in store-native order. An empty store yields
    /// an empty vec, never an error.
    fn list_all(&self) -> AppResult<Vec<BlogPost>>;

    /// Up to `limit` posts after skipping `offset`, in store-native order.
    /// A zero limit or an offset past the row count yields an empty vec.
    fn list(&self, offset: u32, limit: u32) -> AppResult<Vec<BlogPost>>;

    /// Persist a post. A transient post (id zero) is inserted and the
    /// store-assigned id is written back into the caller's record; a post
    /// with an id is updated in place, matching on primary key. The
    /// outcome tag says which path was taken.
    fn save(&self, blog: &mut BlogPost) -> AppResult<SaveOutcome>;

    /// Remove a post by id. Idempotent: deleting an id with no row is
    /// still a success.
    fn delete(&self, id: u32) -> AppResult<()>;

    /// Posts whose title contains `query` as a substring, with the same
    /// windowing semantics as `list`.
    fn search_by_title(&self, query: &str, offset: u32, limit: u32) -> AppResult<Vec<BlogPost>>;

    /// Ensure the backing schema exists and matches. Idempotent; invoked
    /// once at startup, not in steady-state request handling.
    fn migrate(&self) -> AppResult<()>;
}
