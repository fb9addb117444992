/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const DARK:  Self = Self { r: 0.118, g: 0.118, b: 0.180, a: 1.0 }; // #1e1e2e
    pub const TEXT:  Self = Self { r: 0.804, g: 0.839, b: 0.957, a: 1.0 }; // #cdd6f4
    pub const BLUE:  Self = Self { r: 0.537, g: 0.706, b: 0.980, a: 1.0 }; // #89b4fa
    pub const MUTED: Self = Self { r: 0.192, g: 0.196, b: 0.267, a: 1.0 }; // #313244

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let raw = u32::from_str_radix(hex, 16).ok()?;

        let (r, g, b, a) = match hex.len() {
            6 => (raw >> 16 & 0xff, raw >> 8 & 0xff, raw & 0xff, 0xff),
            8 => (raw >> 24 & 0xff, raw >> 16 & 0xff, raw >> 8 & 0xff, raw & 0xff),
            _ => return None,
        };

        Some(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        })
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb() {
        let c = Color::from_hex("#89b4fa").unwrap();
        assert!((c.r - 0.537).abs() < 0.01);
        assert!((c.b - 0.980).abs() < 0.01);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parses_rgba() {
        let c = Color::from_hex("ffffff80").unwrap();
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#xyz").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("").is_none());
    }
}
