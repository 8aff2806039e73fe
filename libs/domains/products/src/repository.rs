use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Inputs are already validated by the service. `update` and `delete` return
/// `ProductError::NotFound` when no record has the given id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product with a fresh id and timestamps
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// All products in creation order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Set the supplied fields and `updated_at` atomically, returning the
    /// updated product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}
