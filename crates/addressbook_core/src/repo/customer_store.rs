//! Customer document store contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and upsert whole customer documents keyed by customer id.
//! - Serialize documents as JSON inside the `customer_documents` table.
//!
//! # Invariants
//! - `put_customer` overwrites the full document; there is no partial update
//!   and no version check.
//! - A stored document whose embedded id differs from its row key is invalid.

use crate::db::DbError;
use crate::model::customer::{Customer, CustomerId};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a document store implementation.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialization(serde_json::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "customer document serialization failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted customer data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Document store client holding customer records.
pub trait CustomerStore {
    /// Returns the stored customer, or `None` when no record exists for `id`.
    fn get_customer(&self, id: &str) -> StoreResult<Option<Customer>>;
    /// Writes the whole customer document, replacing any previous version.
    fn put_customer(&self, customer: &Customer) -> StoreResult<()>;
}

impl<S: CustomerStore + ?Sized> CustomerStore for &S {
    fn get_customer(&self, id: &str) -> StoreResult<Option<Customer>> {
        (**self).get_customer(id)
    }

    fn put_customer(&self, customer: &Customer) -> StoreResult<()> {
        (**self).put_customer(customer)
    }
}

/// SQLite-backed customer document store.
pub struct SqliteCustomerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists every stored customer id in ascending order.
    pub fn list_customer_ids(&self) -> StoreResult<Vec<CustomerId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM customer_documents ORDER BY id ASC;")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}

impl CustomerStore for SqliteCustomerStore<'_> {
    fn get_customer(&self, id: &str) -> StoreResult<Option<Customer>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM customer_documents WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(document) = document else {
            return Ok(None);
        };

        let customer: Customer = serde_json::from_str(&document).map_err(|err| {
            StoreError::InvalidData(format!(
                "document for customer `{id}` is not valid JSON: {err}"
            ))
        })?;
        if customer.id != id {
            return Err(StoreError::InvalidData(format!(
                "document stored under `{id}` carries id `{}`",
                customer.id
            )));
        }

        Ok(Some(customer))
    }

    fn put_customer(&self, customer: &Customer) -> StoreResult<()> {
        if customer.id.is_empty() {
            return Err(StoreError::InvalidData(
                "customer document must carry a non-empty id".to_string(),
            ));
        }

        let document = serde_json::to_string(customer)?;
        self.conn.execute(
            "INSERT INTO customer_documents (id, document, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(id) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at;",
            params![customer.id.as_str(), document],
        )?;

        Ok(())
    }
}
