//! # ssmgr-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Hold the explicit [`RouteTable`](routes::RouteTable) that maps URL paths
//!   to console views; the composition root builds it and hands it over
//! - Serve the **server-side-rendered console** (manager grid, user list,
//!   admin, login, pricing) with `askama` templates and no JavaScript
//! - Serve a small **JSON API** under `/api`
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `ssmgr-app` (for port traits and services) and `ssmgr-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
