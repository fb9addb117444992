//! The chart window for `thermoscope`.
//!
//! Owns the Iced application loop and wires together the moving parts:
//! - Reading source (dora subscription / simulator / local sensors)
//! - Fixed-cadence redraw timer (snapshots the history, repaints)
//! - Config file watcher (live reload on change)

use chrono::{DateTime, Local};
use futures::channel::mpsc::Sender;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Size, Subscription, Task};
use std::time::Duration;
use thermo_chart::{widget::Axes, TemperatureChart, TraceSnapshot};
use thermo_config::{default_path, load as load_config, SourceMode, ThermoConfig};
use thermo_core::{Message, SampleHistory};
use thermo_source::SourceEvent;
use thermo_theme::ChartTheme;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the chart window.  Never returns until the window closes.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .window_size(Size::new(1000.0, 600.0))
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    config:        ThermoConfig,
    theme:         ChartTheme,
    /// Bounded sample window — mutated here, and only here.
    history:       SampleHistory,
    /// Copy of the history taken on the last redraw tick; the chart
    /// renders from this, never from the live history.
    snapshot:      TraceSnapshot,
    axes:          Axes,
    chart:         TemperatureChart,
    last_update:   Option<DateTime<Local>>,
    source_closed: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_else(|e| {
            warn!("Falling back to default config: {e}");
            ThermoConfig::default()
        });
        let theme = ChartTheme::from_config(&config.theme);
        let history = SampleHistory::new(config.chart.capacity);
        let snapshot = TraceSnapshot::from_history(&history);
        let axes = axes_from(&config);

        info!(mode = ?config.source.mode, "Opening chart window");

        let app = Self {
            config,
            theme,
            history,
            snapshot,
            axes,
            chart: TemperatureChart::new(),
            last_update: None,
            source_closed: false,
        };
        (app, Task::none())
    }

    fn title(app: &Self) -> String {
        app.config.chart.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reading(value) => {
                self.history.push(value);
                self.last_update = Some(Local::now());
            }
            Message::SourceClosed => {
                if !self.source_closed {
                    warn!("Reading source closed; chart is frozen");
                    self.source_closed = true;
                }
            }
            Message::Redraw => {
                self.snapshot = TraceSnapshot::from_history(&self.history);
                self.chart.invalidate();
            }
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.theme = ChartTheme::from_config(&cfg.theme);
                    self.history.set_capacity(cfg.chart.capacity);
                    self.axes = axes_from(&cfg);
                    self.config = cfg;
                    self.chart.invalidate();
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let font_size = self.theme.font_size;

        let title = text(&self.config.chart.title).size(font_size + 4.0);

        let chart = self.chart.view(&self.snapshot, &self.axes, &self.theme);

        let status = if self.source_closed {
            "○ source closed"
        } else {
            "● live"
        };
        let latest = self
            .snapshot
            .latest
            .map(|v| format!("{v:.1} °C"))
            .unwrap_or_else(|| "n/a".to_string());
        let updated = self
            .last_update
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        let footer = row![
            text(status).size(font_size - 1.0),
            text(format!(
                "{} / {} samples",
                self.snapshot.len(),
                self.snapshot.capacity
            ))
            .size(font_size - 1.0),
            text(format!("latest {latest}")).size(font_size - 1.0),
            text(format!("updated {updated}")).size(font_size - 1.0),
        ]
        .spacing(18);

        column![
            container(title).center_x(Length::Fill).padding(8),
            container(chart).width(Length::Fill).height(Length::Fill),
            container(footer).padding(8),
        ]
        .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let cadence = Duration::from_millis(self.config.chart.refresh_ms.max(16));
        let redraw = iced::time::every(cadence).map(|_| Message::Redraw);

        Subscription::batch([
            redraw,
            Subscription::run(source_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  Iced uses the function pointer address
// to deduplicate subscriptions across redraws.

/// Spawns the configured reading source and forwards its events.
///
/// The source mode is read from disk once when the subscription starts;
/// changing it requires a restart (chart and theme settings reload live).
fn source_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(64, |mut sender: Sender<Message>| async move {
        let source = load_config(default_path()).unwrap_or_default().source;

        let mut rx = match source.mode {
            SourceMode::Dora => thermo_source::dora::spawn_listener(source.input_id),
            SourceMode::Simulate => {
                thermo_source::simulate::spawn_simulator(source.sample_interval_ms)
            }
            SourceMode::Local => {
                thermo_source::local::spawn_local(source.sample_interval_ms, source.sensor_label)
            }
        };

        while let Some(event) = rx.recv().await {
            let message = match event {
                SourceEvent::Reading(value) => Message::Reading(value),
                SourceEvent::Closed => Message::SourceClosed,
            };
            let _ = sender.try_send(message);
        }

        // Channel closed without an explicit Closed event — surface it, then
        // stall so iced doesn't restart the stream in a loop.
        let _ = sender.try_send(Message::SourceClosed);
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file and sends `ConfigReloaded` on every write.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let mut rx = thermo_config::spawn_watcher(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn axes_from(config: &ThermoConfig) -> Axes {
    Axes {
        y_range: (config.chart.y_min, config.chart.y_max),
        x_label: config.chart.x_label.clone(),
        y_label: config.chart.y_label.clone(),
    }
}
