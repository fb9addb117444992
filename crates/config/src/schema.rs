use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `thermoscope.toml`.
///
/// Every field has a default, so an absent or partial file always yields a
/// runnable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermoConfig {
    /// Chart geometry and axis settings.
    pub chart: ChartConfig,
    /// Where temperature readings come from.
    pub source: SourceConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Chart settings: window size, redraw cadence, axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of samples kept in the rolling window.
    pub capacity: usize,
    /// Redraw period in milliseconds.
    pub refresh_ms: u64,
    /// Lower bound of the fixed vertical axis (°C).
    pub y_min: f32,
    /// Upper bound of the fixed vertical axis (°C).
    pub y_max: f32,
    /// Window / chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity:   100,
            refresh_ms: 100,
            y_min:      15.0,
            y_max:      40.0,
            title:      "Real Time Temperature Monitoring (M1 Pro)".to_string(),
            x_label:    "Timestamp".to_string(),
            y_label:    "Temperature (°C)".to_string(),
        }
    }
}

/// Reading source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Which source feeds the chart.
    pub mode: SourceMode,
    /// Dora input channel to listen on (`dora` mode).
    pub input_id: String,
    /// Sampling period in milliseconds (`simulate` / `local` modes).
    pub sample_interval_ms: u64,
    /// Case-insensitive substring selecting a thermal sensor by label
    /// (`local` mode).  Unset = hottest sensor wins.
    pub sensor_label: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode:               SourceMode::Dora,
            input_id:           "data".to_string(),
            sample_interval_ms: 1_000,
            sensor_label:       None,
        }
    }
}

/// Where readings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Subscribe to a dora dataflow node input (the normal deployment).
    #[default]
    Dora,
    /// Synthesize a noisy sine waveform — run standalone, no runtime needed.
    Simulate,
    /// Sample the host's own thermal sensors via sysinfo.
    Local,
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Text / axis color.
    pub foreground: String,
    /// Trace line color.
    pub line: String,
    /// Grid line color.
    pub grid: String,
    /// Font size in points.
    pub font_size: f32,
    /// Trace line width in logical pixels.
    pub line_width: f32,
    /// Draw the background grid.
    pub show_grid: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground: "#cdd6f4".to_string(), // Catppuccin Mocha — text
            line:       "#89b4fa".to_string(), // Catppuccin Mocha — blue
            grid:       "#313244".to_string(), // Catppuccin Mocha — surface0
            font_size:  13.0,
            line_width: 1.5,
            show_grid:  true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_chart() {
        let cfg = ThermoConfig::default();
        assert_eq!(cfg.chart.capacity, 100);
        assert_eq!(cfg.chart.refresh_ms, 100);
        assert_eq!(cfg.chart.y_min, 15.0);
        assert_eq!(cfg.chart.y_max, 40.0);
        assert_eq!(cfg.chart.x_label, "Timestamp");
        assert_eq!(cfg.chart.y_label, "Temperature (°C)");
        assert_eq!(cfg.chart.title, "Real Time Temperature Monitoring (M1 Pro)");
        assert_eq!(cfg.source.mode, SourceMode::Dora);
        assert_eq!(cfg.source.input_id, "data");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: ThermoConfig = toml::from_str(
            r#"
            [chart]
            capacity = 250

            [source]
            mode = "simulate"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.chart.capacity, 250);
        assert_eq!(cfg.chart.refresh_ms, 100); // untouched default
        assert_eq!(cfg.source.mode, SourceMode::Simulate);
        assert_eq!(cfg.source.input_id, "data");
        assert!(cfg.theme.show_grid);
    }

    #[test]
    fn all_source_modes_parse() {
        for (raw, mode) in [
            ("dora", SourceMode::Dora),
            ("simulate", SourceMode::Simulate),
            ("local", SourceMode::Local),
        ] {
            let cfg: ThermoConfig =
                toml::from_str(&format!("[source]\nmode = \"{raw}\"")).unwrap();
            assert_eq!(cfg.source.mode, mode);
        }
    }

    #[test]
    fn unknown_source_mode_is_rejected() {
        let parsed = toml::from_str::<ThermoConfig>("[source]\nmode = \"udp\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: ThermoConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.chart.capacity, ThermoConfig::default().chart.capacity);
        assert_eq!(cfg.source.sample_interval_ms, 1_000);
    }
}
