//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;
#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod servers;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};

use crate::error::json_error;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, D, C>() -> Router<AppState<S, D, C>>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        // Servers
        .route("/servers", get(servers::list::<S, D, C>))
        .route("/servers/grid", get(servers::grid::<S, D, C>))
        .route("/servers/{id}", get(servers::get::<S, D, C>))
        .route("/user/users", post(servers::query::<S, D, C>))
        // Accounts
        .route("/accounts", get(accounts::list::<S, D, C>))
        .route("/accounts/{id}", get(accounts::get::<S, D, C>))
        // Products
        .route("/products", get(products::list::<S, D, C>))
        .fallback(not_found)
}

async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "no such endpoint")
}
