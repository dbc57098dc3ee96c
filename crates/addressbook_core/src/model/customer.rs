//! Customer and address document types.
//!
//! # Responsibility
//! - Define the canonical customer document persisted by the store.
//! - Provide small lookup helpers over the nested address book.
//!
//! # Invariants
//! - `address_book` keeps insertion order.
//! - Duplicate address ids are representable; callers that require a unique
//!   match must use [`Customer::address_matches`] and check the count.

use serde::{Deserialize, Serialize};

/// Externally assigned customer identifier.
pub type CustomerId = String;

/// Identifier of one address inside a customer's address book.
pub type AddressId = String;

/// Postal address entry stored inside a customer document.
///
/// Descriptive fields are opaque; the core never validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub street_number: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    /// Creates an address with the given id and empty descriptive fields.
    pub fn with_id(id: impl Into<AddressId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Customer document as stored by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable key in the document store.
    pub id: CustomerId,
    pub name: String,
    /// Ordered address book. Missing in older documents, hence the default.
    #[serde(default)]
    pub address_book: Vec<Address>,
}

/// Result of scanning an address book for one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMatches {
    /// Number of entries carrying the queried id.
    pub count: usize,
    /// Position of the first matching entry, if any.
    pub first: Option<usize>,
}

impl Customer {
    /// Creates a customer with an empty address book.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address_book: Vec::new(),
        }
    }

    /// Scans the address book for entries whose id equals `address_id`.
    ///
    /// Comparison is an exact, case-sensitive string match.
    pub fn address_matches(&self, address_id: &str) -> AddressMatches {
        let mut matches = AddressMatches {
            count: 0,
            first: None,
        };
        for (index, address) in self.address_book.iter().enumerate() {
            if address.id == address_id {
                matches.count += 1;
                if matches.first.is_none() {
                    matches.first = Some(index);
                }
            }
        }
        matches
    }
}
