// src/domain/mod.rs
//
// Domain root. Declares the entity modules and re-exports their public API;
// everything else imports from `crate::domain::*`.

pub mod blog;

pub use blog::BlogPost;
