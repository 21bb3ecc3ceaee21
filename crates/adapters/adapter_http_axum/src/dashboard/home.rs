//! Console home page — overview of the catalog.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};

use super::{DashboardError, OrErrorPage, render};
use crate::routes::{NavItem, View};
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    manager_path: Option<String>,
    server_count: usize,
    user_count: usize,
    admin_count: usize,
    product_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /` — console overview.
///
/// # Errors
///
/// Returns [`DashboardError`] when a service call fails.
pub async fn index<S, D, C>(
    State(state): State<AppState<S, D, C>>,
) -> Result<HomeTemplate, DashboardError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let nav = state.routes.nav(None);
    let servers = state.grid_service.list_servers().await.or_error_page(&nav)?;
    let users = state.account_service.list_users().await.or_error_page(&nav)?;
    let admins = state
        .account_service
        .list_admins()
        .await
        .or_error_page(&nav)?;
    let products = state
        .pricing_service
        .list_available()
        .await
        .or_error_page(&nav)?;

    Ok(HomeTemplate {
        title: "Overview",
        nav,
        manager_path: state.routes.path_of(View::Manager).map(str::to_string),
        server_count: servers.len(),
        user_count: users.len(),
        admin_count: admins.len(),
        product_count: products.len(),
    })
}
