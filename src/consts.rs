//! Shared constants for the folio crate.

// ── Selectors ───────────────────────────────────────────────────

/// Elements eligible for scroll-driven activation.
pub const SECTION_SELECTOR: &str = "[data-scroll]";

/// Animatable content region nested inside each section.
pub const CONTENT_SELECTOR: &str = ".scroll-content";

/// Navigation links mirrored from the active section.
pub const NAV_LINK_SELECTOR: &str = ".nav__link";

/// Every in-page anchor that gets smooth scrolling.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Script tag carrying the optional JSON page config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_EXITING: &str = "is-exiting";
pub const CLASS_NAV_ACTIVE: &str = "active";
pub const CLASS_MENU_OPEN: &str = "show";

// ── Section tracking ────────────────────────────────────────────

/// Ratio above which section content is revealed.
pub const REVEAL_RATIO: f64 = 0.1;

/// Ratio above which a section is promoted to active.
pub const ACTIVATE_RATIO: f64 = 0.25;

/// Ratio below which an active section is considered exited.
pub const EXIT_RATIO: f64 = 0.2;

/// Fraction of the viewport height, measured from its midpoint, that counts as "near center".
pub const CENTER_BAND: f64 = 1.0 / 3.0;

/// Quiet period before a scroll burst triggers reconciliation.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

/// Shrinks the observer's trigger region by 10% from the bottom.
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Ratios at which the observer delivers notifications.
pub const OBSERVER_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

// ── Header / hero ───────────────────────────────────────────────

/// Scroll offset past which the header casts a shadow.
pub const HEADER_SHADOW_AFTER_PX: f64 = 100.0;

pub const HEADER_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

pub const HERO_FADE_START_PX: f64 = 0.0;
pub const HERO_FADE_END_PX: f64 = 500.0;

/// Upward drift of the hero content at full fade.
pub const HERO_LIFT_PX: f64 = 30.0;

// ── Typewriter ──────────────────────────────────────────────────

pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;

/// Pause after a phrase is fully typed.
pub const HOLD_DELAY_MS: u32 = 2000;

/// Pause after a phrase is fully erased.
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

// ── Theme / contact ─────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const CONTACT_FOOTER: &str = "Sent via Portfolio Contact Form";
