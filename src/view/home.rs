use crate::model;
use rinja::Template;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct Home<'a> {
    pub posts: &'a [model::Post],
}
