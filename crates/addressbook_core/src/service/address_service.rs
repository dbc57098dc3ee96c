//! Address book service.
//!
//! # Responsibility
//! - Read a customer's address book.
//! - Delete one address by id and persist the whole customer document.
//!
//! # Invariants
//! - Address id uniqueness is checked on lookup: a delete never picks one of
//!   several entries sharing the same id.
//! - Nothing is written unless exactly one address matched.

use crate::model::customer::{Address, AddressId, CustomerId};
use crate::repo::customer_store::{CustomerStore, StoreError};
use crate::service::customer_service::{CustomerService, CustomerServiceError};
use crate::service::ErrorKind;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from address book operations.
#[derive(Debug)]
pub enum AddressServiceError {
    /// Customer id is empty.
    InvalidCustomerId(CustomerId),
    /// No document exists for the customer id.
    CustomerNotFound(CustomerId),
    /// Address id is empty.
    InvalidAddressId(AddressId),
    /// The customer has no address with this id.
    AddressNotFound(AddressId),
    /// More than one address in one book carries this id.
    DuplicateAddressId { address_id: AddressId, count: usize },
    /// Document store failure.
    Store(StoreError),
}

impl AddressServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCustomerId(_) | Self::InvalidAddressId(_) => ErrorKind::InvalidArgument,
            Self::CustomerNotFound(_) | Self::AddressNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateAddressId { .. } => ErrorKind::Inconsistency,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}

impl Display for AddressServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomerId(id) => write!(f, "customer id is not valid: '{id}'"),
            Self::CustomerNotFound(id) => write!(f, "customer not found: '{id}'"),
            Self::InvalidAddressId(id) => write!(f, "address id is not valid: '{id}'"),
            Self::AddressNotFound(id) => write!(f, "address not found: '{id}'"),
            Self::DuplicateAddressId { address_id, count } => write!(
                f,
                "more than one address with id '{address_id}' exists ({count} matches)"
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AddressServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CustomerServiceError> for AddressServiceError {
    fn from(value: CustomerServiceError) -> Self {
        match value {
            CustomerServiceError::InvalidCustomerId(id) => Self::InvalidCustomerId(id),
            CustomerServiceError::CustomerNotFound(id) => Self::CustomerNotFound(id),
            CustomerServiceError::Store(err) => Self::Store(err),
        }
    }
}

/// Address book facade built on top of customer lookup.
pub struct AddressService<S: CustomerStore> {
    customers: CustomerService<S>,
}

impl<S: CustomerStore> AddressService<S> {
    pub fn new(customers: CustomerService<S>) -> Self {
        Self { customers }
    }

    /// Returns the customer's address book in stored order.
    pub fn get_address_book(&self, customer_id: &str) -> Result<Vec<Address>, AddressServiceError> {
        let customer = self.customers.get_customer(customer_id)?;
        Ok(customer.address_book)
    }

    /// Removes the address `address_id` from the customer's book and persists
    /// the customer.
    ///
    /// # Errors
    /// - `InvalidAddressId` when `address_id` is empty, before any store access.
    /// - `InvalidCustomerId` / `CustomerNotFound` from the customer lookup.
    /// - `AddressNotFound` when no entry matches.
    /// - `DuplicateAddressId` when several entries match; nothing is written.
    pub fn delete_address(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<(), AddressServiceError> {
        if address_id.is_empty() {
            return Err(AddressServiceError::InvalidAddressId(address_id.to_string()));
        }

        let mut customer = self.customers.get_customer(customer_id)?;
        let matches = customer.address_matches(address_id);
        let index = match (matches.count, matches.first) {
            (1, Some(index)) => index,
            (0, _) | (_, None) => {
                return Err(AddressServiceError::AddressNotFound(address_id.to_string()));
            }
            (count, Some(_)) => {
                return Err(AddressServiceError::DuplicateAddressId {
                    address_id: address_id.to_string(),
                    count,
                });
            }
        };

        customer.address_book.remove(index);
        self.customers.update_customer(&customer)?;

        info!(
            "event=address_delete module=service status=ok customer_id={customer_id} address_id={address_id} remaining={}",
            customer.address_book.len()
        );
        Ok(())
    }
}
