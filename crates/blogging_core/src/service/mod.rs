//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw console text into validated repository calls.
//! - Separate recoverable input rejections from storage failures.

pub mod blog_service;
