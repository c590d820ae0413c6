use axum::extract::{Form, State};
use axum::response::Response;
use serde::Deserialize;

use crate::mailer::ContactMessage;
use crate::{app::App, view};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
}

pub async fn form() -> Response {
    rinja_axum::into_response(&view::Contact {
        front_message: "Contact Me",
    })
}

/// The original reported "Message Sent" unconditionally; here a relay failure
/// is logged and shown to the submitter instead. Either way the failure stops
/// at this handler.
pub async fn submit(State(app): State<App>, Form(input): Form<ContactForm>) -> Response {
    let contact = ContactMessage {
        name: input.name,
        email: input.email,
        phone: input.phone,
        message: input.message,
    };

    let front_message = match app.mailer.send_contact_message(&contact).await {
        Ok(()) => "Message Sent",
        Err(error) => {
            tracing::error!("could not deliver contact message: {error}");
            "Message Failed"
        }
    };

    rinja_axum::into_response(&view::Contact { front_message })
}
