//! Game settings and preferences
//!
//! Read from the page URL (`?reduced_motion=1&muted=1`). Nothing is stored.

use serde::{Deserialize, Serialize};

/// Default background image, relative to the page
pub const DEFAULT_BACKGROUND: &str = "background.png";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // === Visual Effects ===
    /// Reduced motion (skip the hit flash)
    pub reduced_motion: bool,
    /// Background image URL; `None` uses the solid fill
    pub background: Option<String>,

    // === HUD ===
    /// Show the controls hint while playing
    pub show_instructions: bool,

    // === Audio ===
    pub muted: bool,

    /// Log a state snapshot on goal and hazard events
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            background: Some(DEFAULT_BACKGROUND.to_string()),
            show_instructions: true,
            muted: false,
            debug: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Build settings from a URL query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

            if key == "background" {
                settings.background = match value {
                    "" | "none" => None,
                    url => Some(url.to_string()),
                };
                continue;
            }

            let slot = match key {
                "reduced_motion" => &mut settings.reduced_motion,
                "muted" => &mut settings.muted,
                "instructions" => &mut settings.show_instructions,
                "debug" => &mut settings.debug,
                _ => {
                    log::warn!("Ignoring unknown setting '{}'", key);
                    continue;
                }
            };
            match parse_flag(value) {
                Some(flag) => *slot = flag,
                None => log::warn!("Ignoring bad value '{}' for '{}'", value, key),
            }
        }

        settings
    }

    /// Effective hit flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&search);
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
