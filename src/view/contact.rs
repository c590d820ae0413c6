use rinja::Template;

/// `front_message` doubles as the page heading and the submission state:
/// "Contact Me" on first render, then "Message Sent" or "Message Failed".
#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct Contact {
    pub front_message: &'static str,
}
