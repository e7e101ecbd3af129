#![allow(clippy::float_cmp)]

use super::*;

const VH: f64 = 800.0;
const BAND: f64 = 1.0 / 3.0;

// --- Rect ---

#[test]
fn new_derives_bottom_from_height() {
    let r = Rect::new(100.0, 300.0);
    assert_eq!(r.bottom, 400.0);
    assert_eq!(r.center(), 250.0);
}

#[test]
fn center_distance_is_absolute() {
    assert_eq!(Rect::new(350.0, 100.0).center_distance(VH), 0.0);
    assert_eq!(Rect::new(0.0, 100.0).center_distance(VH), 350.0);
    assert_eq!(Rect::new(800.0, 100.0).center_distance(VH), 450.0);
}

// --- is_near_center ---

#[test]
fn near_center_inside_band() {
    // Midpoint 600, distance 200 < 266.67.
    assert!(Rect::new(550.0, 100.0).is_near_center(VH, BAND));
}

#[test]
fn near_center_outside_band() {
    // Midpoint 700, distance 300 > 266.67.
    assert!(!Rect::new(650.0, 100.0).is_near_center(VH, BAND));
}

#[test]
fn near_center_boundary_is_exclusive() {
    // viewport 900 -> band 300; midpoint 750 -> distance exactly 300.
    assert!(!Rect::new(700.0, 100.0).is_near_center(900.0, BAND));
}

// --- viewport overlap ---

#[test]
fn overlaps_viewport_partial_and_full() {
    assert!(Rect::new(100.0, 300.0).overlaps_viewport(VH));
    assert!(Rect::new(-200.0, 250.0).overlaps_viewport(VH));
    assert!(Rect::new(700.0, 400.0).overlaps_viewport(VH));
}

#[test]
fn overlaps_viewport_rejects_outside() {
    assert!(!Rect::new(800.0, 100.0).overlaps_viewport(VH));
    assert!(!Rect::new(-300.0, 300.0).overlaps_viewport(VH));
}

#[test]
fn fold_and_scrolled_past() {
    assert!(Rect::new(799.0, 10.0).starts_above_fold(VH));
    assert!(!Rect::new(800.0, 10.0).starts_above_fold(VH));
    assert!(Rect::new(-1.0, 10.0).is_scrolled_past());
    assert!(!Rect::new(0.0, 10.0).is_scrolled_past());
}
