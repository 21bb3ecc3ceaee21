//! Seed loading errors.

use ssmgr_domain::error::SsmgrError;

/// Errors raised while loading a catalog seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid TOML or does not match the schema.
    #[error("failed to parse seed file")]
    Parse(#[from] toml::de::Error),

    /// A record in the seed violates a domain invariant.
    #[error("invalid seed record")]
    Invalid(#[from] SsmgrError),
}
