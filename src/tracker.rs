//! Scroll-driven section activation.
//!
//! `SectionTracker` owns the visible/active/exiting flags of every tracked
//! section, the set of active sections, and the nav links mirrored from that
//! set. It never touches the DOM: callers feed it visibility events and a
//! [`PageGeometry`] for live layout queries, then read the resulting flags
//! back out.
//!
//! DESIGN
//! ======
//! Startup is an explicit sequence: register sections and links, call
//! [`SectionTracker::initialize_visible_sections`] once, then start feeding
//! observer batches through [`SectionTracker::handle_batch`]. A reduced-motion
//! preference short-circuits all of it via [`SectionTracker::reveal_all`].
//!
//! TRADE-OFFS
//! ==========
//! In [`ActivationMode::Exclusive`] a batch is resolved in two phases so the
//! single-active invariant is applied once per batch. That means a section
//! promoted early in a batch can lose to one promoted later. The winner is
//! the section closest to the viewport center among the batch's promotions
//! and the already-active sections still inside the center band.
//! [`ActivationMode::Compatible`] keeps the per-event interleaving, where two
//! sections promoted in one batch can both stay active.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::collections::BTreeSet;

use crate::config::{ActivationMode, ScrollConfig};
use crate::geometry::{PageGeometry, Rect};
use crate::nav::{self, NavLink};

/// Document-order index of a tracked section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey(pub usize);

/// Visual state mirrored onto a section and its content region.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionFlags {
    /// Content region revealed. Never reset once set.
    pub visible: bool,
    pub active: bool,
    /// Scrolled past the top of the viewport.
    pub exiting: bool,
}

/// A tracked page region.
#[derive(Debug, Clone)]
pub struct Section {
    pub key: SectionKey,
    pub id: Option<String>,
    /// Whether the section has an animatable content region.
    pub has_content: bool,
    pub flags: SectionFlags,
}

/// One intersection observation of a section against the viewport.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEvent {
    pub target: SectionKey,
    pub ratio: f64,
    pub is_intersecting: bool,
    /// Bounding rect at observation time.
    pub rect: Rect,
}

/// Owns section flags, the active set, and nav link highlights.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    config: ScrollConfig,
    sections: Vec<Section>,
    active: BTreeSet<SectionKey>,
    nav: Vec<NavLink>,
    frozen: bool,
}

/// Outcome of the per-event rules that do not depend on activation mode.
enum EventOutcome {
    Skipped,
    Promote,
    Demoted,
    Unchanged,
}

impl SectionTracker {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self { config, sections: Vec::new(), active: BTreeSet::new(), nav: Vec::new(), frozen: false }
    }

    // --- Registration ---

    /// Register the next section in document order.
    pub fn add_section(&mut self, id: Option<String>, has_content: bool) -> SectionKey {
        let key = SectionKey(self.sections.len());
        self.sections.push(Section { key, id, has_content, flags: SectionFlags::default() });
        key
    }

    pub fn add_nav_link(&mut self, link: NavLink) {
        self.nav.push(link);
    }

    // --- Queries ---

    /// No sections registered; nothing should be observed.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.sections.is_empty()
    }

    /// Reduced motion was applied; events and reconciliation are ignored.
    #[cfg(test)]
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[cfg(test)]
    #[must_use]
    pub fn section(&self, key: SectionKey) -> Option<&Section> {
        self.sections.get(key.0)
    }

    #[must_use]
    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    /// Members of the active set, in document order.
    #[cfg(test)]
    pub fn active_keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.active.iter().copied()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_active(&self, key: SectionKey) -> bool {
        self.active.contains(&key)
    }

    // --- Startup ---

    /// Reveal sections already on screen before the first observer batch.
    ///
    /// Sections near the viewport center are promoted as well; in exclusive
    /// mode only the nearest of them.
    pub fn initialize_visible_sections(&mut self, geometry: &impl PageGeometry) {
        if self.frozen {
            return;
        }
        let vh = geometry.viewport_height();
        let band = self.config.center_band;
        let mut centered = Vec::new();

        for section in &mut self.sections {
            if !section.has_content {
                continue;
            }
            let Some(rect) = geometry.section_rect(section.key) else {
                continue;
            };
            if rect.overlaps_viewport(vh) {
                section.flags.visible = true;
                if rect.is_near_center(vh, band) {
                    centered.push((section.key, rect.center_distance(vh)));
                }
            }
        }

        match self.config.activation {
            ActivationMode::Compatible => {
                for (key, _) in centered {
                    self.activate(key);
                }
            }
            ActivationMode::Exclusive => {
                if let Some(key) = nearest(centered) {
                    self.make_sole_active(key);
                }
            }
        }
    }

    /// Reduced-motion override: reveal and activate every section with content
    /// and stop tracking.
    pub fn reveal_all(&mut self) {
        for section in &mut self.sections {
            if section.has_content {
                section.flags.visible = true;
                section.flags.active = true;
                self.active.insert(section.key);
            }
        }
        self.frozen = true;
    }

    // --- Live updates ---

    /// Process one observer batch, then reconcile.
    pub fn handle_batch(&mut self, events: &[VisibilityEvent], geometry: &impl PageGeometry) {
        self.process_events(events, geometry);
        self.reconcile(geometry);
    }

    /// Apply the reveal, activation, deactivation, and re-entry rules.
    pub fn process_events(&mut self, events: &[VisibilityEvent], geometry: &impl PageGeometry) {
        if self.frozen {
            return;
        }
        match self.config.activation {
            ActivationMode::Compatible => self.process_interleaved(events, geometry),
            ActivationMode::Exclusive => self.process_batched(events, geometry),
        }
    }

    /// Ensure something is active if possible, then recompute nav highlights.
    pub fn reconcile(&mut self, geometry: &impl PageGeometry) {
        if self.frozen {
            return;
        }
        if self.active.is_empty() {
            let vh = geometry.viewport_height();
            let candidates = self.sections.iter().filter_map(|section| {
                let rect = geometry.section_rect(section.key)?;
                rect.starts_above_fold(vh).then(|| (section.key, rect.center_distance(vh)))
            });
            if let Some(key) = nearest(candidates) {
                log::debug!("no active section; falling back to nearest {key:?}");
                self.activate(key);
            }
        }
        self.refresh_nav();
    }

    // --- Internals ---

    fn process_interleaved(&mut self, events: &[VisibilityEvent], geometry: &impl PageGeometry) {
        let vh = geometry.viewport_height();
        for event in events {
            if let EventOutcome::Promote = self.apply_event(event, vh) {
                self.activate(event.target);
                self.demote_off_center(event.target, geometry);
            }
        }
    }

    fn process_batched(&mut self, events: &[VisibilityEvent], geometry: &impl PageGeometry) {
        let vh = geometry.viewport_height();
        let mut promoted: Vec<(SectionKey, Rect)> = Vec::new();

        for event in events {
            match self.apply_event(event, vh) {
                EventOutcome::Promote => {
                    promoted.retain(|(key, _)| *key != event.target);
                    promoted.push((event.target, event.rect));
                }
                EventOutcome::Demoted => promoted.retain(|(key, _)| *key != event.target),
                EventOutcome::Skipped | EventOutcome::Unchanged => {}
            }
        }

        if promoted.is_empty() {
            return;
        }

        // Sections already active and still near center compete with the
        // batch's candidates, so a quiet centered section keeps its place.
        let band = self.config.center_band;
        let incumbents: Vec<(SectionKey, f64)> = self
            .active
            .iter()
            .filter(|key| promoted.iter().all(|(k, _)| k != *key))
            .filter_map(|key| {
                let rect = geometry.section_rect(*key)?;
                rect.is_near_center(vh, band).then(|| (*key, rect.center_distance(vh)))
            })
            .collect();

        let mut ranked: Vec<(SectionKey, f64)> = promoted
            .into_iter()
            .map(|(key, observed)| {
                let rect = geometry.section_rect(key).unwrap_or(observed);
                (key, rect.center_distance(vh))
            })
            .chain(incumbents)
            .collect();
        ranked.sort_by_key(|(key, _)| *key);

        if let Some(winner) = nearest(ranked) {
            self.make_sole_active(winner);
        }
    }

    /// Mode-independent rules for a single event. Activation itself is left
    /// to the caller.
    fn apply_event(&mut self, event: &VisibilityEvent, vh: f64) -> EventOutcome {
        let reveal = self.config.reveal_ratio;
        let activate = self.config.activate_ratio;
        let exit = self.config.exit_ratio;

        let Some(section) = self.sections.get_mut(event.target.0) else {
            return EventOutcome::Skipped;
        };
        if !section.has_content {
            return EventOutcome::Skipped;
        }

        let mut outcome = EventOutcome::Unchanged;

        if event.is_intersecting && event.ratio > reveal {
            section.flags.visible = true;
            section.flags.exiting = false;
            if event.ratio > activate {
                outcome = EventOutcome::Promote;
            }
        }

        if !event.is_intersecting || event.ratio < exit {
            section.flags.active = false;
            self.active.remove(&event.target);
            if event.rect.is_scrolled_past() {
                section.flags.exiting = true;
            }
            outcome = EventOutcome::Demoted;
        }

        if event.is_intersecting && event.rect.starts_above_fold(vh) {
            section.flags.exiting = false;
        }

        outcome
    }

    fn activate(&mut self, key: SectionKey) {
        if let Some(section) = self.sections.get_mut(key.0) {
            section.flags.active = true;
            self.active.insert(key);
        }
    }

    fn deactivate(&mut self, key: SectionKey) {
        if let Some(section) = self.sections.get_mut(key.0) {
            section.flags.active = false;
        }
        self.active.remove(&key);
    }

    /// Deactivate every other section outside the center band.
    fn demote_off_center(&mut self, promoted: SectionKey, geometry: &impl PageGeometry) {
        let vh = geometry.viewport_height();
        let band = self.config.center_band;
        let off_center: Vec<SectionKey> = self
            .sections
            .iter()
            .map(|s| s.key)
            .filter(|key| *key != promoted)
            .filter(|key| !geometry.section_rect(*key).is_some_and(|r| r.is_near_center(vh, band)))
            .collect();
        for key in off_center {
            self.deactivate(key);
        }
    }

    fn make_sole_active(&mut self, key: SectionKey) {
        let others: Vec<SectionKey> = self.active.iter().copied().filter(|k| *k != key).collect();
        for other in others {
            self.deactivate(other);
        }
        for section in &mut self.sections {
            if section.key != key {
                section.flags.active = false;
            }
        }
        self.activate(key);
    }

    fn refresh_nav(&mut self) {
        let ids: Vec<&str> = self
            .active
            .iter()
            .filter_map(|key| self.sections.get(key.0))
            .filter_map(|section| section.id.as_deref())
            .collect();
        nav::highlight(&mut self.nav, ids.iter().copied());
    }
}

/// Smallest distance wins; ties keep the earliest entry.
fn nearest(candidates: impl IntoIterator<Item = (SectionKey, f64)>) -> Option<SectionKey> {
    let mut best: Option<(SectionKey, f64)> = None;
    for (key, distance) in candidates {
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((key, distance));
        }
    }
    best.map(|(key, _)| key)
}
