//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{now_millis, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

const COLLECTION_NAME: &str = "products";

/// Stored shape of a product: `_id` holds the UUID string, timestamps are
/// BSON dates so they sort and compare natively.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    price: f64,
    category: String,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn to_chrono(value: bson::DateTime) -> ProductResult<DateTime<Utc>> {
    let millis = value.timestamp_millis();
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ProductError::Database(format!("Timestamp out of range: {millis}")))
}

impl ProductDocument {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            created_at: to_bson_datetime(product.created_at),
            updated_at: to_bson_datetime(product.updated_at),
        }
    }

    fn into_product(self) -> ProductResult<Product> {
        let id = Uuid::parse_str(&self.id).map_err(|e| {
            ProductError::Database(format!("Stored product id '{}' is invalid: {}", self.id, e))
        })?;

        Ok(Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            created_at: to_chrono(self.created_at)?,
            updated_at: to_chrono(self.updated_at)?,
        })
    }
}

fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

/// `$set` of the supplied fields; `updated_at` goes through `$max` so a
/// writer with a lagging clock never moves it backwards.
fn build_update(input: &UpdateProduct, now: DateTime<Utc>) -> Document {
    let mut set = Document::new();

    if let Some(ref name) = input.name {
        set.insert("name", name.as_str());
    }
    if let Some(price) = input.price {
        set.insert("price", price);
    }
    if let Some(ref category) = input.category {
        set.insert("category", category.as_str());
    }

    let mut update = doc! { "$max": { "updated_at": to_bson_datetime(now) } };
    if !set.is_empty() {
        update.insert("$set", set);
    }
    update
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Use a custom collection name (handy for isolating tests)
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    /// Create the index backing the creation-order listing
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection
            .insert_one(ProductDocument::from_product(&product))
            .await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let documents: Vec<ProductDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        self.collection
            .find_one(id_filter(id))
            .await?
            .map(ProductDocument::into_product)
            .transpose()
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let document = self
            .collection
            .find_one_and_update(id_filter(id), build_update(&input, now_millis()))
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        tracing::info!(product_id = %id, "Product updated successfully");
        document.into_product()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = self.collection.delete_one(id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }
}
