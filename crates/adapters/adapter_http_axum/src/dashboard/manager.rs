//! Manager page — managed proxy servers laid out as a card grid.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::grid::GridLayout;

use super::{DashboardError, OrErrorPage, render};
use crate::api::servers::GridQuery;
use crate::routes::{NavItem, View};
use crate::state::AppState;

/// Server grid page template.
#[derive(Template)]
#[template(path = "manager.html")]
pub struct ManagerTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    layout: GridLayout,
    default_columns: usize,
}

impl IntoResponse for ManagerTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /manager?columns=N` — server cards, `N` per row.
pub async fn page<S, D, C>(
    State(state): State<AppState<S, D, C>>,
    Query(query): Query<GridQuery>,
) -> Result<ManagerTemplate, DashboardError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let nav = state.routes.nav(Some(View::Manager));
    let layout = state
        .grid_service
        .grid(query.columns)
        .await
        .or_error_page(&nav)?;

    Ok(ManagerTemplate {
        title: View::Manager.title(),
        nav,
        layout,
        default_columns: state.grid_service.default_columns().get(),
    })
}
