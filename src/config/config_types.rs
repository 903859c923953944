// src/config/config_types.rs
//
// Config sections for the app. Every field has a default so a partial
// config.toml still loads.

use super::ConfigError;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("rotate line circle"),
            width: 1080,
            height: 720,
            fullscreen: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub nodes: usize, // Number of linked nodes
    pub lines: usize, // Line-and-circle glyphs drawn per node
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { nodes: 5, lines: 2 }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub scale_gap: f32,            // Base increment per tick
    pub scale_div: f32,            // Threshold splitting the two speed phases
    pub first_phase_divisor: u32,  // Speed divisor while floor(scale / div) is even
    pub second_phase_divisor: u32, // Speed divisor while floor(scale / div) is odd
    pub frame_delay_ms: u64,       // Time between chain updates
}

impl AnimationConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scale_gap: 0.05,
            scale_div: 0.51,
            first_phase_divisor: 1,
            second_phase_divisor: 2,
            frame_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub radius_factor: f32,
    pub rotation_degrees: f32,
    pub fore_color: Color,
    pub back_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_factor: 90.0,
            size_factor: 2.9,
            radius_factor: 3.5,
            rotation_degrees: 45.0,
            fore_color: Color::new(0x43, 0xA0, 0x47),
            back_color: Color::new(0xBD, 0xBD, 0xBD),
        }
    }
}

/// An sRGB color, written as `"#RRGGBB"` in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let re = regex::Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").ok()?;
        let caps = re.captures(hex.trim())?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        Some(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}
