use std::time::Duration;

use crate::model::Post;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("feed body is not a JSON array of posts: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch the full post list from the upstream feed. Called once at boot; the
/// result is held read-only for the process lifetime. There is no retry and
/// no refresh, so any failure here is fatal to startup.
pub async fn fetch_posts(url: &str, timeout: Duration) -> Result<Vec<Post>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let posts: Vec<Post> = serde_json::from_str(&body)?;

    tracing::info!(count = posts.len(), url, "loaded posts from upstream feed");

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_url() {
        let error = Error::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://feed.example/posts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "feed returned 502 Bad Gateway for https://feed.example/posts"
        );
    }

    #[test]
    fn decode_error_for_non_array_body() {
        let error: Error = serde_json::from_str::<Vec<Post>>("{\"id\": 1}")
            .unwrap_err()
            .into();
        assert!(error.to_string().starts_with("feed body is not a JSON array"));
    }
}
