//! Axum router assembly.

use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use ssmgr_app::ports::{AccountDirectory, ProductCatalog, ServerSource};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts one console page per entry of the state's
/// [`RouteTable`](crate::routes::RouteTable), the home page at `/`, API
/// routes under `/api`, and `/health`. Unknown paths outside `/api` are
/// redirected to the table's fallback target. Includes a [`TraceLayer`] that
/// logs each HTTP request/response using the `tracing` ecosystem.
pub fn build<S, D, C>(state: AppState<S, D, C>) -> Router
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes(&state.routes))
        .fallback(redirect_unknown::<S, D, C>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn redirect_unknown<S, D, C>(State(state): State<AppState<S, D, C>>, uri: Uri) -> Redirect
where
    S: ServerSource + Send + Sync + 'static,
    D: AccountDirectory + Send + Sync + 'static,
    C: ProductCatalog + Send + Sync + 'static,
{
    tracing::debug!(%uri, fallback = state.routes.fallback(), "redirecting unknown path");
    Redirect::to(state.routes.fallback())
}
