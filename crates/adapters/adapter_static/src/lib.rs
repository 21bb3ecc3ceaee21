//! # ssmgr-adapter-static
//!
//! In-memory catalog that implements every read port of `ssmgr-app`.
//!
//! The console has no persistence: records are loaded once at startup,
//! either from the built-in sample data or from a TOML [`Seed`] file, and
//! served unchanged for the life of the process.
//!
//! ## Built-in sample data
//!
//! | Kind | Records |
//! |------|---------|
//! | Servers | `JP`, `US`, `CN` |
//! | Accounts | one administrator, two users |
//! | Products | monthly, quarterly, yearly plans |
//!
//! ## Dependency rule
//!
//! Depends on `ssmgr-app` (port traits) and `ssmgr-domain` only.

mod error;
mod seed;

use std::collections::HashSet;
use std::sync::Arc;

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::error::{SsmgrError, ValidationError};
use ssmgr_domain::id::{AccountId, ServerId};
use ssmgr_domain::product::Product;
use ssmgr_domain::server::ServerRecord;

pub use error::SeedError;
pub use seed::{AccountSeed, ProductSeed, Seed, ServerSeed};

const SAMPLE: &str = r#"
[[servers]]
id = "JP"
address = "jp.proxy.example.net"
port = 8388
password = "jp-sample"

[[servers]]
id = "US"
address = "us.proxy.example.net"
port = 8388
password = "us-sample"

[[servers]]
id = "CN"
address = "203.0.113.10"
port = 8389
password = "cn-sample"

[[accounts]]
role = "admin"
alias = "Administrator"
email = "admin@example.net"
phone = "555-0100"
created_at = "2017-01-01T00:00:00Z"

[[accounts]]
alias = "Alice"
email = "alice@example.net"
phone = "555-0101"
created_at = "2017-02-01T00:00:00Z"

[[accounts]]
email = "bob@example.net"
phone = "555-0102"
created_at = "2017-02-15T00:00:00Z"

[[products]]
name = "Monthly"
price_cents = 990
description = "30 days, 100 GB transfer"

[[products]]
name = "Quarterly"
price_cents = 2700
description = "90 days, 300 GB transfer"

[[products]]
name = "Yearly"
price_cents = 9900
description = "365 days, unlimited transfer"
"#;

struct Inner {
    servers: Vec<ServerRecord>,
    accounts: Vec<Account>,
    products: Vec<Product>,
}

/// Read-only in-memory catalog.
///
/// Cloning is cheap: all clones share the same records.
#[derive(Clone)]
pub struct StaticCatalog {
    inner: Arc<Inner>,
}

impl StaticCatalog {
    /// Catalog holding the built-in sample records.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the sample goes through the same validation
    /// as any other seed.
    pub fn sample() -> Result<Self, SeedError> {
        Self::from_seed(&Seed::from_toml_str(SAMPLE)?)
    }

    /// Build a catalog from a parsed seed, validating every record.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Invalid`] when a record breaks a domain invariant
    /// or two servers share an id.
    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        let servers = seed.server_records()?;
        ensure_unique_ids(&servers)?;
        let accounts = seed.account_records()?;
        let products = seed.product_records()?;

        tracing::info!(
            servers = servers.len(),
            accounts = accounts.len(),
            products = products.len(),
            "static catalog loaded"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                servers,
                accounts,
                products,
            }),
        })
    }
}

fn ensure_unique_ids(servers: &[ServerRecord]) -> Result<(), SsmgrError> {
    let mut seen = HashSet::with_capacity(servers.len());
    for server in servers {
        if !seen.insert(&server.id) {
            return Err(ValidationError::DuplicateServerId(server.id.to_string()).into());
        }
    }
    Ok(())
}

impl ServerSource for StaticCatalog {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, SsmgrError> {
        Ok(self.inner.servers.clone())
    }

    async fn get_server(&self, id: &ServerId) -> Result<Option<ServerRecord>, SsmgrError> {
        Ok(self
            .inner
            .servers
            .iter()
            .find(|server| &server.id == id)
            .cloned())
    }
}

impl AccountDirectory for StaticCatalog {
    async fn list_accounts(&self, role: Option<Role>) -> Result<Vec<Account>, SsmgrError> {
        Ok(self
            .inner
            .accounts
            .iter()
            .filter(|account| role.is_none_or(|role| account.role == role))
            .cloned()
            .collect())
    }

    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, SsmgrError> {
        Ok(self
            .inner
            .accounts
            .iter()
            .find(|account| account.id == id)
            .cloned())
    }
}

impl ProductCatalog for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, SsmgrError> {
        Ok(self.inner.products.clone())
    }
}
