//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! Batch lookups take a set of ids so a product is never fetched twice in
//! one call.
use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => match e.downcast::<CatalogError>() {
                Ok(e) => *e,
                Err(e) => CatalogError::ValidationError(e.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Best-effort batch lookup: ids the catalog does not know are simply
    /// absent from the result. An empty set makes no request.
    #[instrument(skip(self), fields(requested = ids.len()))]
    pub async fn get_products(&self, ids: &BTreeSet<ProductId>) -> Result<Vec<Product>, CatalogError> {
        self.get_many(ids.iter().cloned().collect()).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(id.clone(), update)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => CatalogError::NotFound(id.clone()),
                other => Self::map_error(other),
            })
    }
}
