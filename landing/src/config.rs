//! Site-wide constants.
//!
//! There is no runtime configuration: the page ships as a static bundle, so
//! everything that would otherwise be a setting lives here.

use tracing::Level;

/// Brand and contact details shown across the page.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub contact_email: &'static str,
    /// Remote scene asset rendered by the hero's 3D viewer.
    pub hero_scene_url: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    brand: "Shilog",
    tagline: "We build scalable full-stack solutions for the modern web.",
    contact_email: "hello@shilog.dev",
    hero_scene_url: "https://prod.spline.design/LU2mWMPbF3Qi1Qxh/scene.splinecode",
};

/// Colours applied through inline styles. The cyan accent comes from
/// Tailwind's `cyan-*` utilities.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Midnight blue page background
    pub primary: &'static str,
    /// Slate
    pub secondary: &'static str,
    /// Off-white body text
    pub text: &'static str,
}

pub const PALETTE: Palette = Palette {
    primary: "#0F172A",
    secondary: "#1E293B",
    text: "#F1F5F9",
};

/// Maximum level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::DEBUG;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::INFO;
