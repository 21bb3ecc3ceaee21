//! Server-side rendered console pages (no JavaScript).
//!
//! Pages are mounted from the [`RouteTable`]: each entry's view decides the
//! handler, and every page renders the navigation from the same table.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;
pub mod home;
pub mod login;
#[allow(clippy::missing_errors_doc)]
pub mod manager;
#[allow(clippy::missing_errors_doc)]
pub mod pricing;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{MethodRouter, get};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::error::SsmgrError;

use crate::error::{message_of, status_of};
use crate::routes::{NavItem, RouteTable, View};
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S, D, C>(table: &RouteTable) -> Router<AppState<S, D, C>>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    table.entries().iter().fold(
        Router::new().route("/", get(home::index::<S, D, C>)),
        |router, entry| router.route(&entry.path, page::<S, D, C>(entry.view)),
    )
}

fn page<S, D, C>(view: View) -> MethodRouter<AppState<S, D, C>>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    match view {
        View::Manager => get(manager::page::<S, D, C>),
        View::UserList => get(accounts::users::<S, D, C>),
        View::Admin => get(accounts::admins::<S, D, C>),
        View::Login => get(login::page::<S, D, C>),
        View::Pricing => get(pricing::page::<S, D, C>),
    }
}

/// Render a template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    status: u16,
    message: String,
}

/// Renders [`SsmgrError`] as an HTML error page inside the console chrome.
#[derive(Debug)]
pub struct DashboardError {
    error: SsmgrError,
    nav: Vec<NavItem>,
}

/// Attach the page navigation to a failed service call.
pub(crate) trait OrErrorPage<T> {
    fn or_error_page(self, nav: &[NavItem]) -> Result<T, DashboardError>;
}

impl<T> OrErrorPage<T> for Result<T, SsmgrError> {
    fn or_error_page(self, nav: &[NavItem]) -> Result<T, DashboardError> {
        self.map_err(|error| DashboardError {
            error,
            nav: nav.to_vec(),
        })
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = status_of(&self.error);
        tracing::debug!(%status, error = %message_of(&self.error), "page request failed");
        let page = ErrorTemplate {
            title: "Error",
            nav: self.nav,
            status: status.as_u16(),
            message: message_of(&self.error),
        };
        (status, render(&page)).into_response()
    }
}
