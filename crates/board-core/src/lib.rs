//! # Board Core
//!
//! The domain layer of the anonymous board.
//! This crate contains the post model, its validation rules and the storage
//! port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, ValidationError};
