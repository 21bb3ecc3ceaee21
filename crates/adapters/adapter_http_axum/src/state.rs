//! Shared application state for axum handlers.

use std::sync::Arc;

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_app::services::account_service::AccountService;
use ssmgr_app::services::grid_service::ServerGridService;
use ssmgr_app::services::pricing_service::PricingService;

use crate::routes::RouteTable;

/// Application state shared across all axum handlers.
///
/// Generic over the server source, account directory and product catalog to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone`; only the `Arc` wrappers are
/// cloned.
pub struct AppState<S, D, C> {
    /// Server list and card grid service.
    pub grid_service: Arc<ServerGridService<S>>,
    /// Account browsing service.
    pub account_service: Arc<AccountService<D>>,
    /// Pricing service.
    pub pricing_service: Arc<PricingService<C>>,
    /// Which view answers at which path.
    pub routes: Arc<RouteTable>,
}

impl<S, D, C> Clone for AppState<S, D, C> {
    fn clone(&self) -> Self {
        Self {
            grid_service: Arc::clone(&self.grid_service),
            account_service: Arc::clone(&self.account_service),
            pricing_service: Arc::clone(&self.pricing_service),
            routes: Arc::clone(&self.routes),
        }
    }
}

impl<S, D, C> AppState<S, D, C>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    /// Create a new application state from service instances and the route
    /// table to mount.
    pub fn new(
        grid_service: ServerGridService<S>,
        account_service: AccountService<D>,
        pricing_service: PricingService<C>,
        routes: RouteTable,
    ) -> Self {
        Self {
            grid_service: Arc::new(grid_service),
            account_service: Arc::new(account_service),
            pricing_service: Arc::new(pricing_service),
            routes: Arc::new(routes),
        }
    }
}
