use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

mod app;
pub mod cli;
pub mod config;
mod controller;
mod error;
pub mod feed;
pub mod mailer;
pub mod model;
mod view;

pub use {app::App, config::Config, error::Error};

pub struct Pressboard {
    app: App,
    listen_addr: String,
}

impl Pressboard {
    /// Fetches the post list from the upstream feed and builds the shared
    /// state. A feed failure propagates out of here; serving post routes
    /// without data would only mask a configuration problem.
    pub async fn boot(config: Config) -> Result<Self> {
        let posts = feed::fetch_posts(
            &config.feed_url,
            Duration::from_secs(config.feed_timeout_secs),
        )
        .await?;

        let mailer = Arc::new(mailer::SmtpMailer::new(config.mailer.clone()));

        Ok(Self {
            app: App::new(posts, mailer),
            listen_addr: config.listen_addr,
        })
    }

    pub async fn serve(self) -> Result<()> {
        let router = router(self.app);

        let listener = tokio::net::TcpListener::bind(&self.listen_addr).await?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

pub fn router(app: App) -> Router {
    Router::new()
        .route("/", get(controller::home))
        .route("/about", get(controller::about))
        .route("/contact", get(controller::contact::form))
        .route("/contact", post(controller::contact::submit))
        .route("/post/:post_id", get(controller::post))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
