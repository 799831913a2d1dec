//! Route definitions for the `/api/products` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/api/products`.
///
/// ```text
/// POST   /add     -> add (multipart)
/// GET    /all     -> list_all
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(product::add))
        .route("/all", get(product::list_all))
        .route("/{id}", get(product::get_by_id).delete(product::delete))
}
