//! Browser binding for the section tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the DOM side of [`SectionTracker`]: discovers `[data-scroll]`
//! sections and nav links, measures them for [`PageGeometry`], converts
//! `IntersectionObserver` entries into [`VisibilityEvent`]s, and writes the
//! tracker's flags back as classes. Scroll events are debounced through
//! [`Debouncer`] with one local task per signal.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::ScrollConfig;
use crate::consts::{
    CLASS_ACTIVE, CLASS_EXITING, CLASS_NAV_ACTIVE, CLASS_VISIBLE, CONTENT_SELECTOR, NAV_LINK_SELECTOR,
    REDUCED_MOTION_QUERY, SECTION_SELECTOR,
};
use crate::debounce::Debouncer;
use crate::error::FolioError;
use crate::geometry::{PageGeometry, Rect};
use crate::nav::NavLink;
use crate::tracker::{SectionKey, SectionTracker, VisibilityEvent};
use crate::web::dom;

/// Live layout of the tracked sections.
struct DomGeometry {
    window: Window,
    sections: Vec<Element>,
}

impl PageGeometry for DomGeometry {
    fn viewport_height(&self) -> f64 {
        dom::inner_height(&self.window)
    }

    fn section_rect(&self, key: SectionKey) -> Option<Rect> {
        let rect = self.sections.get(key.0)?.get_bounding_client_rect();
        Some(Rect { top: rect.top(), bottom: rect.bottom(), height: rect.height() })
    }
}

struct SectionPage {
    tracker: SectionTracker,
    geometry: DomGeometry,
    /// Content region per section, indexed by `SectionKey`.
    contents: Vec<Option<Element>>,
    links: Vec<Element>,
    debounce: Debouncer,
}

impl SectionPage {
    fn key_of(&self, el: &Element) -> Option<SectionKey> {
        self.geometry.sections.iter().position(|s| s == el).map(SectionKey)
    }

    fn events_from(&self, entries: &js_sys::Array) -> Vec<VisibilityEvent> {
        entries
            .iter()
            .filter_map(|value| value.dyn_ref::<IntersectionObserverEntry>().cloned())
            .filter_map(|entry| {
                let target = self.key_of(&entry.target())?;
                let rect = entry.bounding_client_rect();
                Some(VisibilityEvent {
                    target,
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                    rect: Rect { top: rect.top(), bottom: rect.bottom(), height: rect.height() },
                })
            })
            .collect()
    }

    fn handle_batch(&mut self, events: &[VisibilityEvent]) {
        self.tracker.handle_batch(events, &self.geometry);
    }

    fn reconcile(&mut self) {
        self.tracker.reconcile(&self.geometry);
    }

    /// Mirror tracker state onto the DOM. Nav links are only written once
    /// the tracker has reconciled at least once.
    fn sync(&self, include_nav: bool) -> Result<(), FolioError> {
        for section in self.tracker.sections() {
            let Some(el) = self.geometry.sections.get(section.key.0) else {
                continue;
            };
            if section.flags.visible {
                if let Some(Some(content)) = self.contents.get(section.key.0) {
                    dom::set_class(content, CLASS_VISIBLE, true)?;
                }
            }
            dom::set_class(el, CLASS_ACTIVE, section.flags.active)?;
            dom::set_class(el, CLASS_EXITING, section.flags.exiting)?;
        }
        if include_nav {
            for (el, link) in self.links.iter().zip(self.tracker.nav_links()) {
                dom::set_class(el, CLASS_NAV_ACTIVE, link.highlighted)?;
            }
        }
        Ok(())
    }
}

/// Discover sections and start tracking them.
///
/// A page without sections leaves the tracker inert: no observer and no
/// scroll listener are attached.
pub fn mount(window: &Window, document: &Document, config: &ScrollConfig) -> Result<(), FolioError> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    let mut tracker = SectionTracker::new(config.clone());
    let mut contents = Vec::with_capacity(sections.len());
    for el in &sections {
        let content = el.query_selector(CONTENT_SELECTOR)?;
        let id = el.id();
        tracker.add_section((!id.is_empty()).then_some(id), content.is_some());
        contents.push(content);
    }
    if tracker.is_inert() {
        log::debug!("no {SECTION_SELECTOR} elements; section tracking disabled");
        return Ok(());
    }

    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    for link in &links {
        tracker.add_nav_link(NavLink::from_href(link.get_attribute("href").as_deref()));
    }

    let count = sections.len();
    let mut page = SectionPage {
        tracker,
        geometry: DomGeometry { window: window.clone(), sections },
        contents,
        links,
        debounce: Debouncer::new(config.debounce_ms),
    };

    if prefers_reduced_motion(window)? {
        page.tracker.reveal_all();
        page.sync(false)?;
        log::info!("Reduced motion preferred; revealed {count} sections without animation");
        return Ok(());
    }

    page.tracker.initialize_visible_sections(&page.geometry);
    page.sync(false)?;

    let page = Rc::new(RefCell::new(page));
    observe(&page, config)?;
    listen_scroll(window, &page)?;

    log::info!("Scroll animations initialized for {count} sections");
    Ok(())
}

fn prefers_reduced_motion(window: &Window) -> Result<bool, FolioError> {
    Ok(window.match_media(REDUCED_MOTION_QUERY)?.is_some_and(|mq| mq.matches()))
}

fn observe(page: &Rc<RefCell<SectionPage>>, config: &ScrollConfig) -> Result<(), FolioError> {
    let handle = Rc::clone(page);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut page = handle.borrow_mut();
            let events = page.events_from(&entries);
            page.handle_batch(&events);
            dom::warn_on_err("section sync", page.sync(true));
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin);
    let thresholds: js_sys::Array = config.thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    init.set_threshold(&thresholds);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in &page.borrow().geometry.sections {
        observer.observe(el);
    }
    // The observer keeps calling back for the page lifetime.
    callback.forget();
    Ok(())
}

fn listen_scroll(window: &Window, page: &Rc<RefCell<SectionPage>>) -> Result<(), FolioError> {
    let handle = Rc::clone(page);
    dom::listen_passive(window, "scroll", move |_event| {
        let (ticket, quiet_ms) = {
            let mut page = handle.borrow_mut();
            (page.debounce.signal(js_sys::Date::now()), page.debounce.quiet_ms())
        };
        let page = Rc::clone(&handle);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(quiet_ms).await;
            let mut page = page.borrow_mut();
            // The timer already waited out the quiet period.
            if page.debounce.settle(ticket, ticket.due_ms()) {
                page.reconcile();
                dom::warn_on_err("section sync", page.sync(true));
            }
        });
    })
}
