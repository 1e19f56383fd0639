//! Display settings and preferences
//!
//! Persisted in LocalStorage. Flight and scoring constants are not settings.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments around round meshes (field edge, posts, footballs)
    pub fn radial_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 10,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }

    /// Rings per hemisphere on football caps
    pub fn cap_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 4,
            QualityPreset::Medium => 6,
            QualityPreset::High => 10,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Mesh quality preset
    pub quality: QualityPreset,
    /// Draw padding around the base of the goal posts
    #[serde(default)]
    pub post_padding: bool,
    /// Allow dragging to orbit the camera
    #[serde(default = "default_true")]
    pub orbit_controls: bool,
    /// Orbit speed in radians per dragged pixel
    #[serde(default = "default_orbit_sensitivity")]
    pub orbit_sensitivity: f32,
}

fn default_true() -> bool {
    true
}

fn default_orbit_sensitivity() -> f32 {
    0.005
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            post_padding: false,
            orbit_controls: true,
            orbit_sensitivity: default_orbit_sensitivity(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Flip drag-to-orbit and return the new value
    pub fn toggle_orbit_controls(&mut self) -> bool {
        self.orbit_controls = !self.orbit_controls;
        self.orbit_controls
    }

    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "goal_kick_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Discarding stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("No {} storage on native, keeping {:?}", Self::STORAGE_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_orbit_controls() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_orbit_controls());
        assert!(!settings.orbit_controls);
        assert!(settings.toggle_orbit_controls());
        settings.save();
        assert!(settings.orbit_controls);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(QualityPreset::from_str("LOW"), Some(QualityPreset::Low));
        assert_eq!(QualityPreset::from_str("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_higher_quality_has_more_segments() {
        assert!(QualityPreset::Low.radial_segments() < QualityPreset::Medium.radial_segments());
        assert!(QualityPreset::Medium.radial_segments() < QualityPreset::High.radial_segments());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"quality":"High"}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(!settings.post_padding);
        assert!(settings.orbit_controls);
        assert_eq!(settings.orbit_sensitivity, 0.005);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::from_preset(QualityPreset::Low);
        settings.post_padding = true;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quality, QualityPreset::Low);
        assert!(back.post_padding);
    }
}
