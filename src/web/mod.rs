//! Browser entry point and DOM bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. [`start`] runs once when the
//! WASM module loads: it installs logging, reads the page config, and mounts
//! each behavior independently so a page missing one piece of markup still
//! gets the rest.

pub mod chrome;
pub mod contact;
pub mod dom;
pub mod sections;
pub mod typing;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::FolioConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::FolioError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    dom::warn_on_err("folio startup", run());
}

fn run() -> Result<(), FolioError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = load_config(&document);

    dom::warn_on_err("theme toggle", chrome::mount_theme(&window, &document));
    dom::warn_on_err("mobile menu", chrome::mount_menu(&document));
    dom::warn_on_err("smooth scroll", chrome::mount_anchors(&document));
    dom::warn_on_err(
        "scroll effects",
        chrome::mount_scroll_effects(&window, &document, &config.header, &config.hero),
    );
    dom::warn_on_err("contact form", contact::mount(&window, &document, &config.contact));
    dom::warn_on_err("section tracking", sections::mount(&window, &document, &config.scroll));
    dom::warn_on_err("typewriter", typing::mount(&document, &config.typing));
    Ok(())
}

/// Page config from the embedded JSON script, or defaults.
fn load_config(document: &Document) -> FolioConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FolioConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match FolioConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID} [{}]: {e}", e.code());
            FolioConfig::default()
        }
    }
}
