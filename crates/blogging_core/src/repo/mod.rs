//! Repository layer: the storage gateway over blogs and posts.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Keep SQL details (joins, ordering) inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate entity rules before any SQL mutation.
//! - Every call runs in autocommit mode and persists immediately.

pub mod blogging_repo;
