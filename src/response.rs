//! Response helpers.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 201 Created with `Location` and the created entity as body.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    (StatusCode::CREATED, [(LOCATION, location)], Json(data)).into_response()
}

/// `<collection path>/<id>`, tolerating a trailing slash on the collection path.
pub fn location_for(collection_path: &str, id: i64) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}
