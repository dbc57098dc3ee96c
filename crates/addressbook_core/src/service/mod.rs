//! Customer and address-book use-case services.
//!
//! # Responsibility
//! - Validate identifiers and translate store lookups into domain errors.
//! - Keep callers decoupled from the concrete document store.

pub mod address_service;
pub mod customer_service;

/// Coarse classification shared by every service error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required identifier is empty. Raised before any store access.
    InvalidArgument,
    /// The customer, or the address inside a found customer, does not exist.
    NotFound,
    /// Stored data violates an integrity rule (duplicate address ids).
    Inconsistency,
    /// The document store itself failed.
    Store,
}
