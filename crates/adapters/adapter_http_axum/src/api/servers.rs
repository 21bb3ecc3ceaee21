//! JSON REST handlers for proxy servers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::grid::GridLayout;
use ssmgr_domain::id::ServerId;
use ssmgr_domain::server::ServerRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the grid endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GridQuery {
    /// Overrides the configured column count.
    pub columns: Option<i64>,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<ServerRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ServerRecord>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the grid endpoint.
pub enum GridResponse {
    Ok(Json<GridLayout>),
}

impl IntoResponse for GridResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/servers`
pub async fn list<S, D, C>(State(state): State<AppState<S, D, C>>) -> Result<ListResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let servers = state.grid_service.list_servers().await?;
    Ok(ListResponse::Ok(Json(servers)))
}

/// `POST /api/user/users` — bulk query returning every server record.
pub async fn query<S, D, C>(
    State(state): State<AppState<S, D, C>>,
) -> Result<ListResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    list(State(state)).await
}

/// `GET /api/servers/:id`
pub async fn get<S, D, C>(
    State(state): State<AppState<S, D, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let server_id = ServerId::from_str(&id)?;
    let server = state.grid_service.get_server(&server_id).await?;
    Ok(GetResponse::Ok(Json(server)))
}

/// `GET /api/servers/grid?columns=N`
pub async fn grid<S, D, C>(
    State(state): State<AppState<S, D, C>>,
    Query(query): Query<GridQuery>,
) -> Result<GridResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let layout = state.grid_service.grid(query.columns).await?;
    Ok(GridResponse::Ok(Json(layout)))
}
