//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`error::ErrorKind`]: the user-facing failure taxonomy
//! - [`error::Failure`]: a failed request reduced to kind + display text

pub mod error;
