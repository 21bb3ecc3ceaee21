//! JSON REST handlers for products.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::product::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/products` — orderable products, cheapest first.
pub async fn list<S, D, C>(State(state): State<AppState<S, D, C>>) -> Result<ListResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let products = state.pricing_service.list_available().await?;
    Ok(ListResponse::Ok(Json(products)))
}
