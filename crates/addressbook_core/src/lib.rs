//! Customer address book core.
//!
//! Validates identifiers and address-id uniqueness on top of a document store
//! holding whole customer records.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Address, AddressId, AddressMatches, Customer, CustomerId};
pub use repo::customer_store::{CustomerStore, SqliteCustomerStore, StoreError, StoreResult};
pub use service::address_service::{AddressService, AddressServiceError};
pub use service::customer_service::{CustomerService, CustomerServiceError};
pub use service::ErrorKind;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
