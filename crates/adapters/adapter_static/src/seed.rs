//! TOML seed describing the records the catalog starts with.
//!
//! ```toml
//! [[servers]]
//! id = "JP"
//! address = "jp.example.net"
//! port = 8388
//! password = "secret"
//!
//! [[accounts]]
//! role = "admin"
//! email = "root@example.net"
//! phone = "555-0100"
//!
//! [[products]]
//! name = "Monthly"
//! price_cents = 990
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::product::{Product, ProductStatus};
use ssmgr_domain::server::ServerRecord;

use crate::error::SeedError;

/// Raw seed document. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub servers: Vec<ServerSeed>,
    pub accounts: Vec<AccountSeed>,
    pub products: Vec<ProductSeed>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSeed {
    pub id: String,
    pub address: String,
    pub port: u16,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AccountSeed {
    #[serde(default)]
    pub role: Role,
    pub alias: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub price_cents: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Seed {
    /// Parse a seed from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when the text is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] when the file cannot be read, or
    /// [`SeedError::Parse`] when it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub(crate) fn server_records(&self) -> Result<Vec<ServerRecord>, SsmgrError> {
        self.servers
            .iter()
            .map(|seed| {
                ServerRecord::builder()
                    .id(&seed.id)
                    .address(&seed.address)
                    .port(seed.port)
                    .password(&seed.password)
                    .build()
            })
            .collect()
    }

    pub(crate) fn account_records(&self) -> Result<Vec<Account>, SsmgrError> {
        self.accounts
            .iter()
            .map(|seed| {
                let mut builder = Account::builder()
                    .role(seed.role)
                    .phone(&seed.phone)
                    .email(&seed.email)
                    .password(&seed.password);
                if let Some(alias) = &seed.alias {
                    builder = builder.alias(alias);
                }
                if let Some(created_at) = seed.created_at {
                    builder = builder.created_at(created_at);
                }
                builder.build()
            })
            .collect()
    }

    pub(crate) fn product_records(&self) -> Result<Vec<Product>, SsmgrError> {
        self.products
            .iter()
            .map(|seed| {
                Product::builder()
                    .name(&seed.name)
                    .price_cents(seed.price_cents)
                    .description(&seed.description)
                    .status(seed.status)
                    .build()
            })
            .collect()
    }
}
