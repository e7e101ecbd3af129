//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tunable of the page behaviors has a built-in default matching the
//! stock portfolio. A page may override any subset by embedding a JSON
//! object in `<script type="application/json" id="folio-config">`; missing
//! keys keep their defaults.
//!
//! TRADE-OFFS
//! ==========
//! Config that fails to parse or validate is rejected as a whole rather than
//! merged field by field, so a typo never yields a half-applied setup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::FolioError;

/// How promotions within one batch of visibility events are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Collect the whole batch, then promote a single winner.
    #[default]
    Exclusive,
    /// Apply each event in turn; several sections may be active at once.
    Compatible,
}

/// Root config object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub scroll: ScrollConfig,
    pub typing: TypingConfig,
    pub hero: HeroConfig,
    pub header: HeaderConfig,
    pub contact: ContactConfig,
}

/// Section tracking thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub reveal_ratio: f64,
    pub activate_ratio: f64,
    pub exit_ratio: f64,
    pub center_band: f64,
    pub debounce_ms: u32,
    pub root_margin: String,
    pub thresholds: Vec<f64>,
    pub activation: ActivationMode,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_ratio: consts::REVEAL_RATIO,
            activate_ratio: consts::ACTIVATE_RATIO,
            exit_ratio: consts::EXIT_RATIO,
            center_band: consts::CENTER_BAND,
            debounce_ms: consts::SCROLL_DEBOUNCE_MS,
            root_margin: consts::OBSERVER_ROOT_MARGIN.to_owned(),
            thresholds: consts::OBSERVER_THRESHOLDS.to_vec(),
            activation: ActivationMode::default(),
        }
    }
}

/// Typewriter phrases and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_phrase_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "IoT Engineer",
                "\u{2699}\u{FE0F} Designing Intelligent Connected Systems",
                "\u{1F310} Innovating Through Cloud, Automation & Next-Gen Technologies",
                "\u{1F4BB} Solving Real-World Challenges with Smart Technology",
                "\u{1F680} Transforming Ideas into Scalable Solutions!",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            type_ms: consts::TYPE_DELAY_MS,
            delete_ms: consts::DELETE_DELAY_MS,
            hold_ms: consts::HOLD_DELAY_MS,
            next_phrase_ms: consts::NEXT_PHRASE_DELAY_MS,
        }
    }
}

/// Hero fade-out range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub fade_start_px: f64,
    pub fade_end_px: f64,
    pub lift_px: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            fade_start_px: consts::HERO_FADE_START_PX,
            fade_end_px: consts::HERO_FADE_END_PX,
            lift_px: consts::HERO_LIFT_PX,
        }
    }
}

/// Header shadow trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub shadow_after_px: f64,
    pub shadow: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { shadow_after_px: consts::HEADER_SHADOW_AFTER_PX, shadow: consts::HEADER_SHADOW.to_owned() }
    }
}

/// Contact form recipient and signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email_to: String,
    pub footer: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { email_to: "yash.singh@email.com".to_owned(), footer: consts::CONTACT_FOOTER.to_owned() }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON config. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ConfigParse`] for malformed JSON and
    /// [`FolioError::ConfigInvalid`] for values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ConfigInvalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), FolioError> {
        let scroll = &self.scroll;
        for (name, ratio) in [
            ("scroll.reveal_ratio", scroll.reveal_ratio),
            ("scroll.activate_ratio", scroll.activate_ratio),
            ("scroll.exit_ratio", scroll.exit_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(invalid(format!("{name} must be within 0..=1, got {ratio}")));
            }
        }
        if scroll.activate_ratio < scroll.reveal_ratio {
            return Err(invalid("scroll.activate_ratio must not be below scroll.reveal_ratio"));
        }
        if !(scroll.center_band > 0.0 && scroll.center_band <= 1.0) {
            return Err(invalid(format!("scroll.center_band must be within (0, 1], got {}", scroll.center_band)));
        }
        if scroll.thresholds.is_empty() {
            return Err(invalid("scroll.thresholds must not be empty"));
        }
        if let Some(bad) = scroll.thresholds.iter().find(|t| !(0.0..=1.0).contains(*t)) {
            return Err(invalid(format!("scroll.thresholds must be within 0..=1, got {bad}")));
        }
        for (name, px) in [
            ("hero.fade_start_px", self.hero.fade_start_px),
            ("hero.fade_end_px", self.hero.fade_end_px),
            ("hero.lift_px", self.hero.lift_px),
            ("header.shadow_after_px", self.header.shadow_after_px),
        ] {
            if !px.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {px}")));
            }
        }
        if self.hero.fade_end_px <= self.hero.fade_start_px {
            return Err(invalid("hero.fade_end_px must be greater than hero.fade_start_px"));
        }
        if self.typing.phrases.iter().any(String::is_empty) {
            return Err(invalid("typing.phrases must not contain empty phrases"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> FolioError {
    FolioError::ConfigInvalid(message.into())
}
