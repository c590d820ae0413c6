use axum::extract::State;
use axum::response::Response;

use crate::{app::App, view};

/// Renders the full post list in fetch order.
pub async fn home(State(app): State<App>) -> Response {
    rinja_axum::into_response(&view::Home { posts: &app.posts })
}
