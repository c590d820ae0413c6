use rinja::Template;

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct About;
