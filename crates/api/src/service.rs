//! Product service: the one piece of domain logic between the HTTP layer
//! and the repository.

use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product};
use catalog_db::repositories::ProductRepo;
use sqlx::PgPool;

/// An uploaded image payload extracted from a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Declared content type of the uploaded part.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Orchestrates the product repository.
pub struct ProductService;

impl ProductService {
    /// Save a new product, attaching the uploaded image first if one was
    /// supplied and non-empty.
    pub async fn add_product(
        pool: &PgPool,
        mut input: CreateProduct,
        image: Option<ImageUpload>,
    ) -> Result<Product, sqlx::Error> {
        if let Some(upload) = image {
            if !upload.bytes.is_empty() {
                input.image = Some(upload.bytes);
                input.image_type = Some(upload.content_type);
            }
        }
        ProductRepo::create(pool, &input).await
    }

    pub async fn get_all_products(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list_all(pool).await
    }

    pub async fn get_product_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(pool, id).await
    }

    /// Delete a product. Deleting a nonexistent id is a silent no-op.
    pub async fn delete_product(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        ProductRepo::delete(pool, id).await?;
        Ok(())
    }
}
