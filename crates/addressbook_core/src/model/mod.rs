//! Customer document model.
//!
//! # Responsibility
//! - Define the customer record and its nested address book.
//! - Keep one serialized document shape shared by every store implementation.
//!
//! # Invariants
//! - A customer is identified by an externally assigned, non-empty id.
//! - Address ids are expected unique per book but uniqueness is checked on
//!   lookup, not on write.

pub mod customer;
