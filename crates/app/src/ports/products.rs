//! Product catalog port.

use std::future::Future;

use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::product::Product;

/// Read access to the plans offered on the pricing page.
pub trait ProductCatalog {
    /// Return every product, including discontinued ones.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, SsmgrError>> + Send;
}
