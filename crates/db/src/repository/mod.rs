//! Repository functions — one function per database operation.
//!
//! Every function takes a `&Database` and acquires the shared connection
//! itself. No business logic — pure SQL against an existing schema.

pub mod projects;
