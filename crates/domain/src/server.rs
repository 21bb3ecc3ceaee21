//! Server record — one managed proxy endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{SsmgrError, ValidationError};
use crate::id::ServerId;

/// Identifying and connection data for one proxy server.
///
/// The password is opaque: nothing in the console inspects it, it is only
/// carried through to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub id: ServerId,
    pub address: String,
    pub port: u16,
    pub password: String,
}

impl ServerRecord {
    /// Create a builder for constructing a [`ServerRecord`].
    #[must_use]
    pub fn builder() -> ServerRecordBuilder {
        ServerRecordBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] when `address` is empty.
    pub fn validate(&self) -> Result<(), SsmgrError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ServerRecord`].
#[derive(Debug, Default)]
pub struct ServerRecordBuilder {
    id: Option<String>,
    address: Option<String>,
    port: u16,
    password: Option<String>,
}

impl ServerRecordBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Consume the builder, validate, and return a [`ServerRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] if `id` or `address` is missing or
    /// empty.
    pub fn build(self) -> Result<ServerRecord, SsmgrError> {
        let record = ServerRecord {
            id: ServerId::new(self.id.unwrap_or_default())?,
            address: self.address.unwrap_or_default(),
            port: self.port,
            password: self.password.unwrap_or_default(),
        };
        record.validate()?;
        Ok(record)
    }
}
