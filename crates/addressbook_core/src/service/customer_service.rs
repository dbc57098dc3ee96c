//! Customer lookup service.
//!
//! # Responsibility
//! - Fetch customer documents by id with argument validation.
//! - Write whole customer documents back to the store.
//!
//! # Invariants
//! - An empty id is rejected before the store is touched.
//! - Store failures are returned unchanged inside `CustomerServiceError::Store`.

use crate::model::customer::{Customer, CustomerId};
use crate::repo::customer_store::{CustomerStore, StoreError};
use crate::service::ErrorKind;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from customer lookup operations.
#[derive(Debug)]
pub enum CustomerServiceError {
    /// Customer id is empty.
    InvalidCustomerId(CustomerId),
    /// No document exists for the customer id.
    CustomerNotFound(CustomerId),
    /// Document store failure.
    Store(StoreError),
}

impl CustomerServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCustomerId(_) => ErrorKind::InvalidArgument,
            Self::CustomerNotFound(_) => ErrorKind::NotFound,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}

impl Display for CustomerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomerId(id) => write!(f, "customer id is not valid: '{id}'"),
            Self::CustomerNotFound(id) => write!(f, "customer not found: '{id}'"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CustomerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CustomerServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Customer lookup facade over a document store.
pub struct CustomerService<S: CustomerStore> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetches one customer document by id.
    ///
    /// The returned value is a copy owned by the caller; mutating it does not
    /// affect the store until [`CustomerService::update_customer`] is called.
    pub fn get_customer(&self, id: &str) -> Result<Customer, CustomerServiceError> {
        if id.is_empty() {
            return Err(CustomerServiceError::InvalidCustomerId(id.to_string()));
        }

        let customer = self
            .store
            .get_customer(id)?
            .ok_or_else(|| CustomerServiceError::CustomerNotFound(id.to_string()))?;
        debug!(
            "event=customer_get module=service status=ok customer_id={id} addresses={}",
            customer.address_book.len()
        );
        Ok(customer)
    }

    /// Overwrites the stored document with `customer`.
    pub fn update_customer(&self, customer: &Customer) -> Result<(), CustomerServiceError> {
        self.store.put_customer(customer)?;
        debug!(
            "event=customer_update module=service status=ok customer_id={}",
            customer.id
        );
        Ok(())
    }
}
