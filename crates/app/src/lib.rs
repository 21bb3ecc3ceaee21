//! # ssmgr-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServerSource` — ordered list of managed proxy servers
//!   - `AccountDirectory` — user and administrator accounts
//!   - `ProductCatalog` — plans shown on the pricing page
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServerGridService` — fetch servers and lay them out as a card grid
//!   - `AccountService` — list users and administrators
//!   - `PricingService` — list orderable plans
//! - Orchestrate domain objects without knowing *how* data is fetched
//!
//! ## Dependency rule
//! Depends on `ssmgr-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
