use serde::{Deserialize, Serialize};

/// Font sizes offered by the settings screen
pub const FONT_SIZE_PRESETS: [u32; 5] = [14, 16, 18, 20, 22];

fn default_font_size() -> u32 {
    16
}

/// User appearance settings, persisted under the `settings` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, alias = "isDarkMode")]
    pub dark_mode: bool,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: default_font_size(),
        }
    }
}

impl Settings {
    pub fn theme(&self) -> Theme {
        Theme::from_settings(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub notification: &'static str,
    pub placeholder: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#B91C1C",
        secondary: "#EF4444",
        background: "#FEE2E2",
        card: "#FFFFFF",
        text: "#1F2937",
        border: "#FECACA",
        notification: "#DC2626",
        placeholder: "#9CA3AF",
        success: "#10B981",
        warning: "#F59E0B",
        error: "#DC2626",
        info: "#3B82F6",
        surface: "#FEE2E2",
        on_surface: "#1F2937",
    };

    pub const DARK: Palette = Palette {
        primary: "#DC2626",
        secondary: "#F87171",
        background: "#1F2937",
        card: "#111827",
        text: "#F3F4F6",
        border: "#374151",
        notification: "#DC2626",
        placeholder: "#6B7280",
        success: "#10B981",
        warning: "#F59E0B",
        error: "#DC2626",
        info: "#3B82F6",
        surface: "#111827",
        on_surface: "#F3F4F6",
    };
}

/// Text sizes derived from the base font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub h1: f32,
    pub h2: f32,
    pub body: f32,
    pub caption: f32,
}

/// Everything a front end needs to draw, derived from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub dark_mode: bool,
    pub font_size: u32,
    pub colors: Palette,
    /// xs, sm, md, lg, xl
    pub spacing: [u32; 5],
    /// sm, md, lg, xl
    pub border_radius: [u32; 4],
    pub typography: Typography,
}

impl Theme {
    pub fn from_settings(settings: &Settings) -> Self {
        let base = settings.font_size as f32;
        Self {
            dark_mode: settings.dark_mode,
            font_size: settings.font_size,
            colors: if settings.dark_mode {
                Palette::DARK
            } else {
                Palette::LIGHT
            },
            spacing: [4, 8, 16, 24, 32],
            border_radius: [4, 8, 12, 16],
            typography: Typography {
                h1: base * 2.0,
                h2: base * 1.5,
                body: base,
                caption: base * 0.875,
            },
        }
    }
}
