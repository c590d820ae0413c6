use std::sync::Arc;

use crate::mailer::Mailer;
use crate::model::Post;

/// Shared state handed to every request handler. The post list is populated
/// once at boot and never mutated, so handlers read it without coordination.
#[derive(Clone)]
pub struct App {
    pub posts: Arc<[Post]>,
    pub mailer: Arc<dyn Mailer>,
}

impl App {
    pub fn new(posts: Vec<Post>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            posts: posts.into(),
            mailer,
        }
    }
}
