//! # ssmgr-domain
//!
//! Pure domain model for the ssmgr proxy management console.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **server records** (proxy endpoints: address, port, credential)
//! - Define **accounts** (regular users and administrators)
//! - Define **products** (plans shown on the pricing page)
//! - Lay server records out as a **card grid** (`grid::layout`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod account;
pub mod grid;
pub mod product;
pub mod server;
