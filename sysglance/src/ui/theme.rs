//! Shared UI colors. The theme mode only swaps text/track colors; data colors are fixed.

use ratatui::style::Color;

use crate::types::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub detail: Color,
    pub muted: Color,
    pub track: Color,
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            text: Color::Rgb(0xE2, 0xE8, 0xF0),
            detail: Color::Rgb(0xA5, 0xB4, 0xFC),
            muted: Color::Rgb(0x9C, 0xA3, 0xAF),
            track: Color::Rgb(0x4B, 0x55, 0x63),
        },
        ThemeMode::Light => Palette {
            text: Color::Rgb(0x00, 0x00, 0x00),
            detail: Color::Rgb(0x4B, 0x55, 0x63),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            track: Color::Rgb(0xD1, 0xD5, 0xDB),
        },
    }
}

/// Gauges switch to the warning fill strictly above this percentage.
pub const WARN_THRESHOLD: f64 = 80.0;

pub const GAUGE_NORMAL: Color = Color::Rgb(0x3B, 0x82, 0xF6);
pub const GAUGE_WARNING: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const ERROR_FG: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const AUTO_ON: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const AUTO_OFF: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const ACCENT: Color = Color::Rgb(0x3B, 0x82, 0xF6);

pub fn gauge_color(percent: f64) -> Color {
    if percent > WARN_THRESHOLD {
        GAUGE_WARNING
    } else {
        GAUGE_NORMAL
    }
}

pub fn series_color(metric: Metric) -> Color {
    match metric {
        Metric::Cpu => Color::Rgb(0x88, 0x84, 0xD8),
        Metric::Memory => Color::Rgb(0x82, 0xCA, 0x9D),
        Metric::Disk => Color::Rgb(0xFF, 0x73, 0x00),
    }
}
