//! Scroll-reactive styling for the header and hero.
//!
//! Both effects are pure functions of the window's vertical scroll offset;
//! the browser binding recomputes them on every scroll event.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::config::{HeaderConfig, HeroConfig};

/// Header `box-shadow` for the given scroll offset.
#[must_use]
pub fn header_shadow(scroll_y: f64, config: &HeaderConfig) -> &str {
    if scroll_y > config.shadow_after_px { &config.shadow } else { "none" }
}

/// Opacity and vertical offset of the hero content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    /// Vertical translation in pixels; negative moves up.
    pub translate_y: f64,
}

impl HeroFade {
    /// CSS `opacity` value.
    #[must_use]
    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Linear fade across `fade_start_px..fade_end_px`, clamped outside it.
#[must_use]
pub fn hero_fade(scroll_y: f64, config: &HeroConfig) -> HeroFade {
    if scroll_y <= config.fade_start_px {
        return HeroFade { opacity: 1.0, translate_y: 0.0 };
    }
    if scroll_y >= config.fade_end_px {
        return HeroFade { opacity: 0.0, translate_y: -config.lift_px };
    }
    let progress = (scroll_y - config.fade_start_px) / (config.fade_end_px - config.fade_start_px);
    HeroFade { opacity: 1.0 - progress, translate_y: -(progress * config.lift_px) }
}
