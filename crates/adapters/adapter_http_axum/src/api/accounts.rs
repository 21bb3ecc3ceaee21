//! JSON REST handlers for accounts.

use axum::Json;
use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};
use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::id::AccountId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// `user` or `admin`; every account when absent.
    pub role: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Account>>),
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
    Ok(Json<Account>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/accounts?role=user|admin`
pub async fn list<S, D, C>(
    State(state): State<AppState<S, D, C>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let role = query
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()?;
    let accounts = state.account_service.list_accounts(role).await?;
    Ok(ListResponse::Ok(Json(accounts)))
}

/// `GET /api/accounts/:id`
pub async fn get<S, D, C>(
    State(state): State<AppState<S, D, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    let account_id = AccountId::from_str(&id)?;
    let account = state.account_service.get_account(account_id).await?;
    Ok(GetResponse::Ok(Json(account)))
}
