use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Post not found")]
    PostNotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::PostNotFound => {
                (StatusCode::NOT_FOUND, "Post not found").into_response()
            }
            Error::Internal(inner) => {
                tracing::error!("internal server error: {inner}");
                (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_not_found_renders_404() {
        let response = Error::PostNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_renders_500() {
        let response = Error::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn post_not_found_display() {
        assert_eq!(Error::PostNotFound.to_string(), "Post not found");
    }
}
