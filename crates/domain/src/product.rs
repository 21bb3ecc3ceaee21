//! Product — a plan listed on the pricing page.

use serde::{Deserialize, Serialize};

use crate::error::{SsmgrError, ValidationError};
use crate::id::ProductId;

/// Whether a product can still be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Available,
    Discontinued,
}

/// A priced plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in cents.
    pub price_cents: u32,
    pub description: String,
    pub status: ProductStatus,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), SsmgrError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }

    /// Price formatted with two decimals, e.g. `9.90`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// Step-by-step builder for [`Product`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    price_cents: u32,
    description: Option<String>,
    status: ProductStatus,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price_cents(mut self, price_cents: u32) -> Self {
        self.price_cents = price_cents;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Product, SsmgrError> {
        let product = Product {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            price_cents: self.price_cents,
            description: self.description.unwrap_or_default(),
            status: self.status,
        };
        product.validate()?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_available_product_by_default() {
        let product = Product::builder()
            .name("Monthly")
            .price_cents(990)
            .build()
            .unwrap();
        assert!(product.is_available());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Product::builder().price_cents(100).build();
        assert!(matches!(
            result,
            Err(SsmgrError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_format_price_with_two_decimals() {
        let product = Product::builder()
            .name("Yearly")
            .price_cents(9905)
            .build()
            .unwrap();
        assert_eq!(product.price_label(), "99.05");

        let free = Product::builder().name("Trial").build().unwrap();
        assert_eq!(free.price_label(), "0.00");
    }

    #[test]
    fn should_serialize_status_in_lowercase() {
        let product = Product::builder()
            .name("Legacy")
            .status(ProductStatus::Discontinued)
            .build()
            .unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], "discontinued");
    }
}
