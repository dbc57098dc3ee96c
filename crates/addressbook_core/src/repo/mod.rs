//! Document store boundary and its SQLite implementation.
//!
//! # Responsibility
//! - Define the get-by-id / upsert contract the services depend on.
//! - Keep SQL and JSON document details out of the service layer.
//!
//! # Invariants
//! - Store APIs report "no such customer" as `Ok(None)`, never as an error.
//! - Read paths reject corrupt persisted documents instead of masking them.

pub mod customer_store;
