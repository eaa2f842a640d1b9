//! Color Constants for the Shop Theme
//!
//! Two palettes, one per [`Theme`]. Views never pick colors directly; they
//! ask [`palette`] for the active one.

use eframe::egui::Color32;

use crate::egui_app::types::Theme;

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub top_bar: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub on_accent: Color32,
    pub error: Color32,
    pub success: Color32,
}

pub const LIGHT: Palette = Palette {
    background: Color32::from_rgb(0xF5, 0xF6, 0xFA),
    top_bar: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    surface: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    border: Color32::from_rgb(0xDD, 0xE1, 0xE8),
    text: Color32::from_rgb(0x1F, 0x23, 0x2B),
    text_muted: Color32::from_rgb(0x6B, 0x72, 0x80),
    accent: Color32::from_rgb(0x4F, 0x46, 0xE5),
    on_accent: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    error: Color32::from_rgb(0xDC, 0x26, 0x26),
    success: Color32::from_rgb(0x16, 0xA3, 0x4A),
};

pub const DARK: Palette = Palette {
    background: Color32::from_rgb(0x12, 0x14, 0x1A),
    top_bar: Color32::from_rgb(0x1B, 0x1E, 0x26),
    surface: Color32::from_rgb(0x22, 0x26, 0x30),
    border: Color32::from_rgb(0x33, 0x38, 0x45),
    text: Color32::from_rgb(0xE6, 0xE8, 0xEE),
    text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
    accent: Color32::from_rgb(0x81, 0x8C, 0xF8),
    on_accent: Color32::from_rgb(0x12, 0x14, 0x1A),
    error: Color32::from_rgb(0xF8, 0x71, 0x71),
    success: Color32::from_rgb(0x4A, 0xDE, 0x80),
};

/// Palette for the given theme
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
