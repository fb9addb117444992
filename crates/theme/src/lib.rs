pub mod colors;

pub use colors::Color;

use thermo_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Building a [`ChartTheme`] is infallible — invalid color strings fall back
/// to safe defaults.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    /// Window and plot-area background.
    pub background: Color,
    /// Text: title, axis labels, tick labels.
    pub foreground: Color,
    /// Trace line color.
    pub line:       Color,
    /// Grid and axis-frame color.
    pub grid:       Color,
    pub font_size:  f32,
    pub line_width: f32,
    pub show_grid:  bool,
}

impl ChartTheme {
    /// Build a [`ChartTheme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground: Color::from_hex(&cfg.foreground).unwrap_or(Color::TEXT),
            line:       Color::from_hex(&cfg.line).unwrap_or(Color::BLUE),
            grid:       Color::from_hex(&cfg.grid).unwrap_or(Color::MUTED),
            font_size:  cfg.font_size,
            line_width: cfg.line_width,
            show_grid:  cfg.show_grid,
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_falls_back() {
        let cfg = ThemeConfig {
            line: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        let theme = ChartTheme::from_config(&cfg);
        assert_eq!(theme.line, Color::BLUE);
    }
}
