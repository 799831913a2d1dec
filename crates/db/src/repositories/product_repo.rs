//! Repository for the `products` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, category, description, quantity, price, brand, image, image_type, created_at";

/// Provides CRUD operations for products.
///
/// Storage, indexing, and consistency are delegated to PostgreSQL; errors
/// surface unchanged as `sqlx::Error`.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row with its id populated.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (name, category, description, quantity, price, brand, image, image_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.price)
            .bind(&input.brand)
            .bind(&input.image)
            .bind(&input.image_type)
            .fetch_one(pool)
            .await
    }

    /// List every product, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List products with an exact category match.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// List products whose name contains `keyword`, case-insensitively.
    pub async fn search_by_name(
        pool: &PgPool,
        keyword: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE name ILIKE '%' || $1 || '%'
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(keyword)
            .fetch_all(pool)
            .await
    }
}
