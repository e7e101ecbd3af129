#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::tracker::SectionKey;

/// Vertical extent of an element relative to the viewport's top edge, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

impl Rect {
    /// Rect spanning `top..top + height`.
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, bottom: top + height, height }
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Absolute distance between this rect's midpoint and the viewport's midpoint.
    #[must_use]
    pub fn center_distance(&self, viewport_height: f64) -> f64 {
        (self.center() - viewport_height / 2.0).abs()
    }

    /// Within `band * viewport_height` of the viewport's vertical midpoint.
    #[must_use]
    pub fn is_near_center(&self, viewport_height: f64, band: f64) -> bool {
        self.center_distance(viewport_height) < viewport_height * band
    }

    /// At least partially inside the viewport.
    #[must_use]
    pub fn overlaps_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }

    /// Top edge above the viewport's bottom edge (not fully below the fold).
    #[must_use]
    pub fn starts_above_fold(&self, viewport_height: f64) -> bool {
        self.top < viewport_height
    }

    /// Top edge scrolled past the viewport's top edge.
    #[must_use]
    pub fn is_scrolled_past(&self) -> bool {
        self.top < 0.0
    }
}

/// Live layout queries the tracker needs from its host.
///
/// The browser implementation reads `getBoundingClientRect` and
/// `innerHeight`; tests supply a fixed table.
pub trait PageGeometry {
    fn viewport_height(&self) -> f64;

    /// Current rect of the section, or `None` if it can no longer be measured.
    fn section_rect(&self, key: SectionKey) -> Option<Rect>;
}
