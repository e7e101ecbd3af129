//! Page chrome: theme toggle, mobile menu, smooth anchors, header and hero effects.
//!
//! Every element here is optional. A page without a theme toggle, menu,
//! header or hero simply skips that binding.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window};

use crate::config::{HeaderConfig, HeroConfig};
use crate::consts::{ANCHOR_SELECTOR, CLASS_MENU_OPEN, NAV_LINK_SELECTOR, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::effects;
use crate::error::{FolioError, best_effort};
use crate::menu::MobileMenu;
use crate::nav;
use crate::theme::Theme;
use crate::web::dom;

// =============================================================================
// THEME
// =============================================================================

/// Apply the stored theme and wire `#theme-toggle`.
pub fn mount_theme(window: &Window, document: &Document) -> Result<(), FolioError> {
    let root = document.document_element().ok_or_else(|| FolioError::missing("html"))?;
    let storage = best_effort("localStorage", window.local_storage()).flatten();
    let stored = match &storage {
        Some(storage) => best_effort("stored theme", storage.get_item(THEME_STORAGE_KEY)).flatten(),
        None => None,
    };
    root.set_attribute(THEME_ATTRIBUTE, Theme::from_stored(stored.as_deref()).as_str())?;

    let Some(toggle) = document.get_element_by_id("theme-toggle") else {
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_event| {
        let current = Theme::from_stored(root.get_attribute(THEME_ATTRIBUTE).as_deref());
        dom::warn_on_err("theme toggle", apply_theme(&root, storage.as_ref(), current.toggled()));
    })
}

fn apply_theme(root: &Element, storage: Option<&Storage>, theme: Theme) -> Result<(), FolioError> {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    if let Some(storage) = storage {
        best_effort("theme persistence", storage.set_item(THEME_STORAGE_KEY, theme.as_str()));
    }
    Ok(())
}

// =============================================================================
// MOBILE MENU
// =============================================================================

/// Wire `#nav-toggle` to open `#nav-menu`, and close it on nav link clicks.
pub fn mount_menu(document: &Document) -> Result<(), FolioError> {
    let Some(menu_el) = document.get_element_by_id("nav-menu") else {
        return Ok(());
    };
    let body = document.body().ok_or_else(|| FolioError::missing("body"))?;
    let state = Rc::new(Cell::new(MobileMenu::default()));

    if let Some(toggle) = document.get_element_by_id("nav-toggle") {
        let (state, menu_el, body) = (Rc::clone(&state), menu_el.clone(), body.clone());
        dom::listen(&toggle, "click", move |_event| {
            let mut menu = state.get();
            menu.toggle();
            state.set(menu);
            dom::warn_on_err("menu toggle", render_menu(&menu_el, &body, menu));
        })?;
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR)? {
        let (state, menu_el, body) = (Rc::clone(&state), menu_el.clone(), body.clone());
        dom::listen(&link, "click", move |_event| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            dom::warn_on_err("menu close", render_menu(&menu_el, &body, menu));
        })?;
    }
    Ok(())
}

fn render_menu(menu_el: &Element, body: &HtmlElement, menu: MobileMenu) -> Result<(), FolioError> {
    dom::set_class(menu_el, CLASS_MENU_OPEN, menu.is_open())?;
    dom::set_style(body, "overflow", menu.body_overflow())
}

// =============================================================================
// SMOOTH SCROLL
// =============================================================================

/// Intercept in-page anchor clicks and scroll to the target smoothly.
pub fn mount_anchors(document: &Document) -> Result<(), FolioError> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let (doc, link) = (document.clone(), anchor.clone());
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                scroll_to_fragment(&doc, &href);
            }
        })?;
    }
    Ok(())
}

fn scroll_to_fragment(document: &Document, href: &str) {
    let Some(target) = nav::fragment_target(href).and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

// =============================================================================
// HEADER SHADOW + HERO FADE
// =============================================================================

struct ScrollTargets {
    header: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    icons: Option<HtmlElement>,
}

impl ScrollTargets {
    fn is_empty(&self) -> bool {
        self.header.is_none() && self.hero.is_none() && self.icons.is_none()
    }

    fn apply(&self, scroll_y: f64, header: &HeaderConfig, hero: &HeroConfig) -> Result<(), FolioError> {
        if let Some(el) = &self.header {
            dom::set_style(el, "box-shadow", effects::header_shadow(scroll_y, header))?;
        }
        let fade = effects::hero_fade(scroll_y, hero);
        if let Some(el) = &self.hero {
            dom::set_style(el, "opacity", &fade.opacity_css())?;
            dom::set_style(el, "transform", &fade.transform_css())?;
        }
        if let Some(el) = &self.icons {
            dom::set_style(el, "opacity", &fade.opacity_css())?;
        }
        Ok(())
    }
}

/// Restyle `.header`, `.home__content` and `.tech-icons` on every scroll.
pub fn mount_scroll_effects(
    window: &Window,
    document: &Document,
    header: &HeaderConfig,
    hero: &HeroConfig,
) -> Result<(), FolioError> {
    let targets = ScrollTargets {
        header: dom::query_html(document, ".header")?,
        hero: dom::query_html(document, ".home__content")?,
        icons: dom::query_html(document, ".tech-icons")?,
    };
    if targets.is_empty() {
        return Ok(());
    }

    targets.apply(dom::scroll_y(window), header, hero)?;

    let (win, header, hero) = (window.clone(), header.clone(), hero.clone());
    dom::listen_passive(window, "scroll", move |_event| {
        dom::warn_on_err("scroll effects", targets.apply(dom::scroll_y(&win), &header, &hero));
    })
}
