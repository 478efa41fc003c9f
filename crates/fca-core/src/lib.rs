//! # FCA Core
//!
//! Domain records, field normalization, row validation, the spreadsheet codec,
//! the bulk import orchestrator, and repository traits for the FCA admin console.

pub mod domain;
pub mod normalizer;
pub mod validator;
pub mod spreadsheet;
pub mod import;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, StoreError};
