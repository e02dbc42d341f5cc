//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! settings format, demo requirements and demo presets on the host.

use serde::{Deserialize, Serialize};
use webapi_atlas::DemoId;

pub const LOCALSTORAGE_SETTINGS_KEY: &str = "webapi_atlas.settings.v1";
pub const LOCALSTORAGE_NOTE_KEY: &str = "webapi_atlas.demo.note";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "深色",
            Theme::Light => "淺色",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub theme: Theme,
    /// Hash route of the last page viewed, restored when the app opens without one.
    #[serde(default)]
    pub last_route: String,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            last_route: String::new(),
        }
    }
}

impl PersistedSettings {
    /// Missing or unreadable settings fall back to defaults.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }
}

/// Where a demo's browser capability lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Window,
    Navigator,
    Document,
}

/// The global a demo needs before its widget can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserRequirement {
    pub scope: Scope,
    pub property: &'static str,
    /// Shown to the user when the property is missing.
    pub display: &'static str,
}

pub fn requirement(demo: DemoId) -> BrowserRequirement {
    let (scope, property, display) = match demo {
        DemoId::MediaDevices => (Scope::Navigator, "mediaDevices", "navigator.mediaDevices"),
        DemoId::WebAudio => (Scope::Window, "AudioContext", "AudioContext"),
        DemoId::LocalStorage => (Scope::Window, "localStorage", "window.localStorage"),
        DemoId::Vibration => (Scope::Navigator, "vibrate", "navigator.vibrate"),
        DemoId::Canvas => (Scope::Window, "CanvasRenderingContext2D", "Canvas 2D"),
        DemoId::OnlineStatus => (Scope::Navigator, "onLine", "navigator.onLine"),
        DemoId::Notifications => (Scope::Window, "Notification", "Notification"),
        DemoId::PageVisibility => (Scope::Document, "visibilityState", "document.visibilityState"),
    };
    BrowserRequirement {
        scope,
        property,
        display,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub fn key(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Waveform::Sine => "正弦波",
            Waveform::Square => "方波",
            Waveform::Sawtooth => "鋸齒波",
            Waveform::Triangle => "三角波",
        }
    }

    pub fn from_key(key: &str) -> Option<Waveform> {
        Waveform::all().iter().copied().find(|w| w.key() == key)
    }

    pub fn all() -> &'static [Waveform] {
        &[
            Waveform::Sine,
            Waveform::Square,
            Waveform::Sawtooth,
            Waveform::Triangle,
        ]
    }
}

pub const TONE_MIN_HZ: f32 = 55.0;
pub const TONE_MAX_HZ: f32 = 1760.0;
pub const TONE_DEFAULT_HZ: f32 = 440.0;

pub fn clamp_frequency(hz: f32) -> f32 {
    if hz.is_nan() {
        return TONE_DEFAULT_HZ;
    }
    hz.clamp(TONE_MIN_HZ, TONE_MAX_HZ)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibrationPattern {
    pub label: &'static str,
    /// Alternating vibrate/pause durations in milliseconds.
    pub durations_ms: &'static [u32],
}

impl VibrationPattern {
    pub fn total_ms(&self) -> u32 {
        self.durations_ms.iter().sum()
    }
}

pub fn vibration_presets() -> &'static [VibrationPattern] {
    &[
        VibrationPattern {
            label: "短震",
            durations_ms: &[200],
        },
        VibrationPattern {
            label: "心跳",
            durations_ms: &[100, 120, 100, 600, 100, 120, 100],
        },
        VibrationPattern {
            label: "SOS",
            durations_ms: &[
                100, 60, 100, 60, 100, 200, 300, 60, 300, 60, 300, 200, 100, 60, 100, 60, 100,
            ],
        },
    ]
}

pub const CANVAS_COLORS: &[(&str, &str)] = &[
    ("#7aa2ff", "藍"),
    ("#ff6b6b", "紅"),
    ("#51cf66", "綠"),
    ("#ffd43b", "黃"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fall_back_to_defaults() {
        assert_eq!(PersistedSettings::parse(None), PersistedSettings::default());
        assert_eq!(
            PersistedSettings::parse(Some("not json")),
            PersistedSettings::default()
        );
        assert_eq!(PersistedSettings::parse(Some("{}")).theme, Theme::Dark);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let s = PersistedSettings {
            theme: Theme::Light,
            last_route: "#/category/storage".to_string(),
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert!(raw.contains("\"light\""));
        assert_eq!(PersistedSettings::parse(Some(&raw)), s);
    }

    #[test]
    fn theme_toggles_between_two_states() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_ne!(Theme::Dark.as_attr(), Theme::Light.as_attr());
    }

    #[test]
    fn every_demo_has_a_requirement() {
        for &demo in DemoId::all() {
            let req = requirement(demo);
            assert!(!req.property.is_empty());
            assert!(!req.display.is_empty());
        }
        assert_eq!(requirement(DemoId::Vibration).scope, Scope::Navigator);
    }

    #[test]
    fn waveform_keys_round_trip() {
        for &w in Waveform::all() {
            assert_eq!(Waveform::from_key(w.key()), Some(w));
        }
        assert_eq!(Waveform::from_key("noise"), None);
    }

    #[test]
    fn frequency_is_clamped_to_the_audible_range() {
        assert_eq!(clamp_frequency(10.0), TONE_MIN_HZ);
        assert_eq!(clamp_frequency(99_999.0), TONE_MAX_HZ);
        assert_eq!(clamp_frequency(f32::NAN), TONE_DEFAULT_HZ);
        assert_eq!(clamp_frequency(880.0), 880.0);
    }

    #[test]
    fn vibration_presets_are_well_formed() {
        for p in vibration_presets() {
            assert!(!p.durations_ms.is_empty());
            // Vibrate/pause pairs end on a vibrate segment.
            assert_eq!(p.durations_ms.len() % 2, 1, "{}", p.label);
            assert!(p.total_ms() < 10_000);
        }
    }
}
