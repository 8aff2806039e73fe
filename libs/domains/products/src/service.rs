//! Product Service - validation and orchestration over the repository

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service
///
/// Normalizes and validates input before it reaches the repository, and
/// resolves path ids. Ids that are not well-formed UUIDs cannot name any
/// product and are reported as not found.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

/// Malformed ids name no product and resolve to `NotFound`.
pub(crate) fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let input = input.validated()?;
        self.repository.create(input).await
    }

    /// List all products in creation order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let uuid = parse_id(id)?;

        self.repository
            .get_by_id(uuid)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Update the supplied fields of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let uuid = parse_id(id)?;
        let input = input.validated()?;

        self.repository.update(uuid, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let uuid = parse_id(id)?;
        self.repository.delete(uuid).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
