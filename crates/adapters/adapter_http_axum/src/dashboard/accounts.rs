//! User list and administrator pages.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::account::Account;

use super::{DashboardError, OrErrorPage, render};
use crate::routes::{NavItem, View};
use crate::state::AppState;

/// One table row. Never carries the password.
pub struct AccountRow {
    name: String,
    email: String,
    phone: String,
    joined: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            name: account.display_name().to_string(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            joined: account.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Account list page template.
#[derive(Template)]
#[template(path = "accounts.html")]
pub struct AccountListTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    rows: Vec<AccountRow>,
}

impl IntoResponse for AccountListTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

impl AccountListTemplate {
    fn new(view: View, nav: Vec<NavItem>, accounts: &[Account]) -> Self {
        Self {
            title: view.title(),
            nav,
            rows: accounts.iter().map(AccountRow::from).collect(),
        }
    }
}

/// `GET /user` — regular users.
pub async fn users<S, D, C>(
    State(state): State<AppState<S, D, C>>,
) -> Result<AccountListTemplate, DashboardError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let nav = state.routes.nav(Some(View::UserList));
    let accounts = state
        .account_service
        .list_users()
        .await
        .or_error_page(&nav)?;
    Ok(AccountListTemplate::new(View::UserList, nav, &accounts))
}

/// `GET /admin` — administrators.
pub async fn admins<S, D, C>(
    State(state): State<AppState<S, D, C>>,
) -> Result<AccountListTemplate, DashboardError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let nav = state.routes.nav(Some(View::Admin));
    let accounts = state
        .account_service
        .list_admins()
        .await
        .or_error_page(&nav)?;
    Ok(AccountListTemplate::new(View::Admin, nav, &accounts))
}
