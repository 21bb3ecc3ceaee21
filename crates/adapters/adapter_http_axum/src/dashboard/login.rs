//! Sign-in page. Renders the form only; credentials are never checked.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};

use super::render;
use crate::routes::{NavItem, View};
use crate::state::AppState;

/// Sign-in page template.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
}

impl IntoResponse for LoginTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /login`
pub async fn page<S, D, C>(State(state): State<AppState<S, D, C>>) -> LoginTemplate
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    LoginTemplate {
        title: View::Login.title(),
        nav: state.routes.nav(Some(View::Login)),
    }
}
