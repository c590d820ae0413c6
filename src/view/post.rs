use crate::model;
use rinja::Template;

#[derive(Template)]
#[template(path = "pages/post.html")]
pub struct Post<'a> {
    pub post: &'a model::Post,
}
