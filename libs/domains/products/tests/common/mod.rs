//! Test doubles for the products domain

use async_trait::async_trait;
use domain_products::{
    NewProduct, Product, ProductError, ProductRepository, ProductResult, UpdateProduct,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Vec-backed repository; insertion order is creation order
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(input);
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Repository whose every call fails as if the database were unreachable
pub struct FailingRepository;

fn unavailable() -> ProductError {
    ProductError::Database("connection refused: mongodb://10.0.0.5:27017".to_string())
}

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn create(&self, _input: NewProduct) -> ProductResult<Product> {
        Err(unavailable())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _id: Uuid) -> ProductResult<Option<Product>> {
        Err(unavailable())
    }

    async fn update(&self, _id: Uuid, _input: UpdateProduct) -> ProductResult<Product> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> ProductResult<()> {
        Err(unavailable())
    }
}
