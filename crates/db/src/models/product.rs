//! Product entity model and DTOs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
///
/// `image` and `image_type` are populated together or not at all.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub brand: String,
    pub image: Option<Vec<u8>>,
    pub image_type: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new product.
///
/// Built by the API layer from multipart form fields; the image fields are
/// filled in by the product service when an upload is attached.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub brand: String,
    pub image: Option<Vec<u8>>,
    pub image_type: Option<String>,
}

/// Wire representation of a product.
///
/// Raw image bytes are replaced by a Base64 text encoding; the image fields
/// are omitted entirely when the product has no image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let image_base64 = product.image.as_deref().map(|bytes| BASE64.encode(bytes));
        let image_type = image_base64.as_ref().and(product.image_type);
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            brand: product.brand,
            image_base64,
            image_type,
        }
    }
}
