//! Pricing service — plans shown on the pricing page.

use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::product::Product;

use crate::ports::ProductCatalog;

/// Application service for the pricing view.
pub struct PricingService<C> {
    catalog: C,
}

impl<C: ProductCatalog> PricingService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Orderable products, cheapest first.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the catalog.
    pub async fn list_available(&self) -> Result<Vec<Product>, SsmgrError> {
        let mut products: Vec<Product> = self
            .catalog
            .list_products()
            .await?
            .into_iter()
            .filter(Product::is_available)
            .collect();
        products.sort_by_key(|product| product.price_cents);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssmgr_domain::product::ProductStatus;

    struct InMemoryCatalog(Vec<Product>);

    impl ProductCatalog for InMemoryCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, SsmgrError> {
            Ok(self.0.clone())
        }
    }

    fn product(name: &str, price_cents: u32, status: ProductStatus) -> Product {
        Product::builder()
            .name(name)
            .price_cents(price_cents)
            .status(status)
            .build()
            .unwrap()
    }

    fn make_service() -> PricingService<InMemoryCatalog> {
        PricingService::new(InMemoryCatalog(vec![
            product("Yearly", 9900, ProductStatus::Available),
            product("Legacy", 500, ProductStatus::Discontinued),
            product("Monthly", 990, ProductStatus::Available),
        ]))
    }

    #[tokio::test]
    async fn should_hide_discontinued_products_and_sort_by_price() {
        let svc = make_service();
        let names: Vec<String> = svc
            .list_available()
            .await
            .unwrap()
            .into_iter()
            .map(|product| product.name)
            .collect();
        assert_eq!(names, vec!["Monthly", "Yearly"]);
    }
}
