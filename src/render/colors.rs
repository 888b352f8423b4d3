//! Color definitions for stats and plant appearance

use crate::entity::plant::Stat;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Darken color by a factor (0.0 = black, 1.0 = unchanged)
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Linear blend, `t = 0.0` gives `self`, `t = 1.0` gives `other`
    pub fn lerp(&self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// 8-bit channels for terminal output (alpha dropped)
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

pub const LEAF_GREEN: Color = Color::new(0.3, 0.8, 0.3, 1.0);
pub const WITHERED: Color = Color::new(0.55, 0.4, 0.2, 1.0);
pub const BLOSSOM: Color = Color::new(0.95, 0.5, 0.75, 1.0);
pub const POT: Color = Color::new(0.75, 0.4, 0.25, 1.0);
pub const PEST: Color = Color::new(0.9, 0.2, 0.1, 1.0);

/// Bar color for each stat
pub fn stat_color(stat: Stat) -> Color {
    match stat {
        Stat::Water => Color::new(0.2, 0.6, 0.9, 1.0),     // Blue
        Stat::Nutrients => Color::new(0.8, 0.6, 0.2, 1.0), // Amber
        Stat::Health => Color::new(0.9, 0.3, 0.4, 1.0),    // Rose
        Stat::Growth => Color::new(0.3, 0.8, 0.3, 1.0),    // Green
    }
}

/// Leaf color from health: withered brown at 0, green at 100
pub fn leaf_color(health: f32) -> Color {
    WITHERED.lerp(LEAF_GREEN, health / 100.0)
}

/// Dim a bar whose value is running low (below 20 it fades toward 60%)
pub fn warning_tint(base: Color, value: f32) -> Color {
    if value >= 20.0 {
        return base;
    }
    let brightness = 0.6 + 0.4 * (value.max(0.0) / 20.0);
    base.darken(brightness)
}
