//! # Color 模块
//!
//! RGBA 颜色：解析、插值与明暗判断。
//!
//! 背景色过渡按通道线性插值；文字与状态栏的明暗样式由感知亮度决定：
//!
//! ```text
//! brightness = (299 * r + 587 * g + 114 * b) / 1000
//! is_light   = brightness > 180
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// 亮色判定阈值（严格大于）
pub const LIGHT_BRIGHTNESS_THRESHOLD: f32 = 180.0;

/// RGBA 颜色，每通道 8 位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// 不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 以 0.0 - 1.0 的透明度创建颜色
    pub fn with_opacity(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        Self::rgba(r, g, b, unit_to_channel(opacity))
    }

    /// 感知亮度 (0 - 255)
    pub fn brightness(&self) -> f32 {
        (299.0 * self.r as f32 + 587.0 * self.g as f32 + 114.0 * self.b as f32) / 1000.0
    }

    /// 是否为亮色
    pub fn is_light(&self) -> bool {
        self.brightness() > LIGHT_BRIGHTNESS_THRESHOLD
    }

    /// 按通道线性插值
    ///
    /// `t` 会被限制在 0.0 - 1.0；`t == 0` 返回 `self`，`t == 1` 返回 `other`。
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: lerp_channel(self.a, other.a, t),
        }
    }

    /// 透明度 (0.0 - 1.0)
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return parse_function(&lower)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        named(&lower).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let short = |i: usize| -> Option<u8> {
        let v = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
        Some(v * 17)
    };
    let long = |i: usize| -> Option<u8> { u8::from_str_radix(&hex[i..i + 2], 16).ok() };

    match hex.len() {
        3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
        4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Color::rgb(long(0)?, long(2)?, long(4)?)),
        8 => Some(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => None,
    }
}

/// 解析 `rgb(r, g, b)` / `rgba(r, g, b, a)`
fn parse_function(s: &str) -> Option<Color> {
    let (name, rest) = s.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();

    let channel = |p: &str| -> Option<u8> {
        let v: f32 = p.parse().ok()?;
        (0.0..=255.0).contains(&v).then(|| v.round() as u8)
    };

    match (name.trim(), parts.as_slice()) {
        ("rgb", [r, g, b]) => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        ("rgba", [r, g, b, a]) => {
            let alpha: f32 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color::with_opacity(channel(*r)?, channel(*g)?, channel(*b)?, alpha))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}
