//! Handlers for the `/api/products` resource.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, ProductDto};

use crate::error::{AppError, AppResult};
use crate::service::{ImageUpload, ProductService};
use crate::state::AppState;

/// Fallback when an uploaded part declares no content type, so that image
/// bytes are never stored without one.
const DEFAULT_IMAGE_TYPE: &str = "application/octet-stream";

/// POST /api/products/add
///
/// Consumes multipart form fields (name, category, description, quantity,
/// price, brand, optional image file) and inserts one row. Unknown fields
/// are ignored; an empty image file is treated as absent.
pub async fn add(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<&'static str> {
    let mut name = None;
    let mut category = None;
    let mut description = None;
    let mut quantity = None;
    let mut price = None;
    let mut brand = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "name" => name = Some(text(field).await?),
            "category" => category = Some(text(field).await?),
            "description" => description = Some(text(field).await?),
            "quantity" => quantity = Some(parse(field, "quantity").await?),
            "price" => price = Some(parse(field, "price").await?),
            "brand" => brand = Some(text(field).await?),
            "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_IMAGE_TYPE)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();
                image = Some(ImageUpload {
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let input = CreateProduct {
        name: required(name, "name")?,
        category: required(category, "category")?,
        description: required(description, "description")?,
        quantity: required(quantity, "quantity")?,
        price: required(price, "price")?,
        brand: required(brand, "brand")?,
        image: None,
        image_type: None,
    };

    ProductService::add_product(&state.pool, input, image).await?;
    Ok("Product added successfully")
}

/// GET /api/products/all
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDto>>> {
    let products = ProductService::get_all_products(&state.pool).await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDto>> {
    let product = ProductService::get_product_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(ProductDto::from(product)))
}

/// DELETE /api/products/{id}
///
/// Unconditionally deletes; responds 200 whether or not a row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<&'static str> {
    ProductService::delete_product(&state.pool, id).await?;
    Ok("Deleted")
}

/// Read a multipart field as text.
async fn text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Read a multipart field as text and parse it into a number.
async fn parse<T: std::str::FromStr>(field: Field<'_>, name: &str) -> Result<T, AppError> {
    text(field)
        .await?
        .parse()
        .map_err(|_| AppError::BadRequest(format!("field `{name}` must be a number")))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing field `{name}`")))
}
