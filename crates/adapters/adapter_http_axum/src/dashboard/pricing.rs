//! Pricing page — orderable plans.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::product::Product;

use super::{DashboardError, OrErrorPage, render};
use crate::routes::{NavItem, View};
use crate::state::AppState;

/// Pricing page template.
#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    title: &'static str,
    nav: Vec<NavItem>,
    products: Vec<Product>,
}

impl IntoResponse for PricingTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /pricing`
pub async fn page<S, D, C>(
    State(state): State<AppState<S, D, C>>,
) -> Result<PricingTemplate, DashboardError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let nav = state.routes.nav(Some(View::Pricing));
    let products = state
        .pricing_service
        .list_available()
        .await
        .or_error_page(&nav)?;

    Ok(PricingTemplate {
        title: View::Pricing.title(),
        nav,
        products,
    })
}
