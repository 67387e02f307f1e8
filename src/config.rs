//! Tuning constants for the page effects.
//!
//! Everything has a compiled-in default; a handful of fields can be
//! overridden from `data-fx-*` attributes on `<body>` so a page can tweak the
//! effects without rebuilding the wasm bundle.

use std::str::FromStr;

use log::Level;

/// Violet palette the particles draw from.
pub const PARTICLE_PALETTE: [&str; 4] = ["#a1a1ff", "#7c4dff", "#b0b7ff", "#d9ddff"];

pub const ATTR_LOG_LEVEL: &str = "data-fx-log-level";
pub const ATTR_PARTICLES: &str = "data-fx-particles";
pub const ATTR_COPY_MS: &str = "data-fx-copy-ms";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub log_level: Level,
    pub particle_count: usize,
    pub shape_count: usize,
    /// Fraction of the remaining distance the cursor covers each frame.
    pub cursor_smoothing: f64,
    pub magnetic_strength: f64,
    pub magnetic_scale: f64,
    pub tilt_degrees: f64,
    pub tilt_lift_px: f64,
    pub copy_confirm_ms: i32,
    pub copy_confirm_text: &'static str,
    pub copy_highlight: &'static str,
    pub reveal_threshold: f64,
    pub swipe_threshold_px: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            particle_count: 50,
            shape_count: 4,
            cursor_smoothing: 0.1,
            magnetic_strength: 20.0,
            magnetic_scale: 1.05,
            tilt_degrees: 8.0,
            tilt_lift_px: 8.0,
            copy_confirm_ms: 1500,
            copy_confirm_text: "✅ Copied!",
            copy_highlight:
                "linear-gradient(135deg, rgba(161, 161, 255, 0.2), rgba(124, 77, 255, 0.1))",
            reveal_threshold: 0.1,
            swipe_threshold_px: 50.0,
        }
    }
}

impl Settings {
    /// Defaults, overridden by whatever `lookup` returns for the `data-fx-*`
    /// attribute names. Values that fail to parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(level) = parse_attr::<Level, _>(&lookup, ATTR_LOG_LEVEL) {
            settings.log_level = level;
        }
        if let Some(count) = parse_attr::<usize, _>(&lookup, ATTR_PARTICLES) {
            settings.particle_count = count;
        }
        if let Some(ms) = parse_attr::<i32, _>(&lookup, ATTR_COPY_MS) {
            if ms >= 0 {
                settings.copy_confirm_ms = ms;
            }
        }
        settings
    }
}

fn parse_attr<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|raw| raw.trim().parse().ok())
}
