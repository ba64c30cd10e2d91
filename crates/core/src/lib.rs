//! Core library for sift
//!
//! This crate implements the **Functional Core** of the sift application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The sift project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`sift_core`** (this crate): Pure transformation functions with zero I/O
//! - **`sift`**: HTTP serving, CLI handling, and orchestration (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`classify`]: The token classifier: bucket assignment, numeric summation,
//!   and the reversed alternating-case concatenation
//! - [`policy`]: Named constants resolving the classifier's behavioral choices
//! - [`validate`]: Request-shape validation run once at the boundary
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sift_core::classify::classify_tokens;
//!
//! let tokens = vec!["a".to_string(), "1".to_string(), "$".to_string()];
//! let result = classify_tokens(&tokens);
//!
//! assert_eq!(result.odd_numbers, vec!["1"]);
//! assert_eq!(result.alphabets, vec!["A"]);
//! assert_eq!(result.special_characters, vec!["$"]);
//! assert_eq!(result.sum, "1");
//! ```

pub mod classify;
pub mod policy;
pub mod validate;
