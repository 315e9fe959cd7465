//! Blog/post domain model.
//!
//! # Responsibility
//! - Define the records persisted by the storage gateway.
//! - Own the non-blank rules shared by repository and service layers.
//!
//! # Invariants
//! - Identifiers are assigned by storage, never by callers.
//! - Entities are immutable once persisted.

pub mod blog;
pub mod post;
pub mod validation;
