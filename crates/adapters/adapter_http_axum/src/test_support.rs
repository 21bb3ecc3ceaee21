//! Fixed in-memory ports for handler tests.

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_app::services::account_service::AccountService;
use ssmgr_app::services::grid_service::ServerGridService;
use ssmgr_app::services::pricing_service::PricingService;
use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::grid::ColumnsPerRow;
use ssmgr_domain::id::{AccountId, ServerId};
use ssmgr_domain::product::{Product, ProductStatus};
use ssmgr_domain::server::ServerRecord;

use crate::routes::RouteTable;
use crate::state::AppState;

pub(crate) struct StubCatalog {
    servers: Vec<ServerRecord>,
    accounts: Vec<Account>,
    products: Vec<Product>,
}

impl StubCatalog {
    pub(crate) fn regions() -> Self {
        let servers = ["JP", "US", "CN"]
            .into_iter()
            .map(|code| {
                ServerRecord::builder()
                    .id(code)
                    .address(format!("{}.proxy.test", code.to_lowercase()))
                    .port(8388)
                    .password("do-not-render")
                    .build()
                    .unwrap()
            })
            .collect();
        let accounts = vec![
            Account::builder()
                .role(Role::Admin)
                .alias("Root")
                .email("root@proxy.test")
                .phone("555-0100")
                .password("do-not-render")
                .build()
                .unwrap(),
            Account::builder()
                .alias("Alice")
                .email("alice@proxy.test")
                .phone("555-0101")
                .build()
                .unwrap(),
        ];
        let products = vec![
            Product::builder()
                .name("Monthly")
                .price_cents(990)
                .build()
                .unwrap(),
            Product::builder()
                .name("Legacy")
                .price_cents(100)
                .status(ProductStatus::Discontinued)
                .build()
                .unwrap(),
        ];
        Self {
            servers,
            accounts,
            products,
        }
    }
}

impl ServerSource for StubCatalog {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, SsmgrError> {
        Ok(self.servers.clone())
    }

    async fn get_server(&self, id: &ServerId) -> Result<Option<ServerRecord>, SsmgrError> {
        Ok(self.servers.iter().find(|srv| &srv.id == id).cloned())
    }
}

impl AccountDirectory for StubCatalog {
    async fn list_accounts(&self, role: Option<Role>) -> Result<Vec<Account>, SsmgrError> {
        Ok(self
            .accounts
            .iter()
            .filter(|acc| role.is_none_or(|role| acc.role == role))
            .cloned()
            .collect())
    }

    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, SsmgrError> {
        Ok(self.accounts.iter().find(|acc| acc.id == id).cloned())
    }
}

impl ProductCatalog for StubCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, SsmgrError> {
        Ok(self.products.clone())
    }
}

pub(crate) type StubState = AppState<StubCatalog, StubCatalog, StubCatalog>;

pub(crate) fn test_state(routes: RouteTable) -> StubState {
    AppState::new(
        ServerGridService::new(StubCatalog::regions(), ColumnsPerRow::new(2).unwrap()),
        AccountService::new(StubCatalog::regions()),
        PricingService::new(StubCatalog::regions()),
        routes,
    )
}
