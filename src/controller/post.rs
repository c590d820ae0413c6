use axum::extract::{Path, State};
use axum::response::Response;

use crate::{app::App, error::Error, model, view};

/// A non-numeric path segment never reaches this handler; the `Path<i64>`
/// extractor rejects it as a client error first.
pub async fn post(
    State(app): State<App>,
    Path(post_id): Path<i64>,
) -> Result<Response, Error> {
    let post = model::Post::find(&app.posts, post_id).ok_or(Error::PostNotFound)?;

    Ok(rinja_axum::into_response(&view::Post { post }))
}
