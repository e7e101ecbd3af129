//! Contact form binding: submit opens the mail client instead of posting.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::config::ContactConfig;
use crate::contact::ContactMessage;
use crate::error::FolioError;
use crate::web::dom;

pub fn mount(window: &Window, document: &Document, config: &ContactConfig) -> Result<(), FolioError> {
    let Some(form) = document.get_element_by_id("contact-form") else {
        return Ok(());
    };
    let (win, doc, config) = (window.clone(), document.clone(), config.clone());
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        dom::warn_on_err("contact form", submit(&win, &doc, &config));
    })
}

fn submit(window: &Window, document: &Document, config: &ContactConfig) -> Result<(), FolioError> {
    let message = ContactMessage::from_fields(
        &field_value(document, "name")?,
        &field_value(document, "subject")?,
        &field_value(document, "message")?,
    );
    window.location().set_href(&message.mailto_link(config))?;
    Ok(())
}

fn field_value(document: &Document, id: &str) -> Result<String, FolioError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::missing(format!("#{id}")))?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    Ok(el.text_content().unwrap_or_default())
}
