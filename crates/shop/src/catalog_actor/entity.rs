//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Query = ();
    type Error = CatalogError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        let product = Product::new(id, params.name, params.description, params.price);
        product.validate()?;
        Ok(product)
    }

    /// Applies a partial update.
    ///
    /// # Fields Updated
    /// - `name`: display name, must stay non-empty
    /// - `description`: free text
    /// - `price`: current price, must stay non-negative
    async fn on_update(&mut self, update: ProductUpdate) -> Result<(), CatalogError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        self.validate()
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }
}

impl Product {
    fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if self.price < Decimal::ZERO {
            return Err(CatalogError::ValidationError(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
