use axum::response::Response;

use crate::view;

pub async fn about() -> Response {
    rinja_axum::into_response(&view::About)
}
