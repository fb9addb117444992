use crate::{ChartScale, TraceSnapshot};
use iced::widget::canvas::{self, Canvas, Cache, Geometry, Path, Stroke, Text};
use iced::widget::text::Shaping;
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme, Vector};
use thermo_core::Message;
use thermo_theme::ChartTheme;

// Plot-area margins, sized for tick and axis labels.
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 42.0;

const X_INTERVALS: usize = 5;
const Y_INTERVALS: usize = 5;

/// Live line chart of the temperature trace.
///
/// Geometry is cached between redraw ticks; [`invalidate`] drops the cache
/// after a fresh snapshot is taken so the next frame repaints.  Readings
/// arriving between ticks never rebuild geometry — the redraw cadence is
/// the timer's.
///
/// [`invalidate`]: TemperatureChart::invalidate
#[derive(Debug, Default)]
pub struct TemperatureChart {
    cache: Cache,
}

/// Axis configuration forwarded from `[chart]` config.
#[derive(Debug, Clone)]
pub struct Axes {
    pub y_range: (f32, f32),
    pub x_label: String,
    pub y_label: String,
}

impl TemperatureChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop cached geometry — the next draw repaints from the snapshot.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn view<'a>(
        &'a self,
        snapshot: &'a TraceSnapshot,
        axes: &'a Axes,
        theme: &'a ChartTheme,
    ) -> Element<'a, Message> {
        Canvas::new(ChartProgram {
            cache: &self.cache,
            snapshot,
            axes,
            theme,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

struct ChartProgram<'a> {
    cache:    &'a Cache,
    snapshot: &'a TraceSnapshot,
    axes:     &'a Axes,
    theme:    &'a ChartTheme,
}

impl canvas::Program<Message> for ChartProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let plot = Rectangle {
                x:      MARGIN_LEFT,
                y:      MARGIN_TOP,
                width:  (frame.width() - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
                height: (frame.height() - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            };
            let scale = ChartScale::new(self.snapshot.x_range(), self.axes.y_range);

            frame.fill_rectangle(Point::ORIGIN, frame.size(), self.theme.background.to_iced());

            self.draw_grid(frame, plot, &scale);
            self.draw_axis_labels(frame, plot);
            self.draw_trace(frame, plot, &scale);

            // Plot frame drawn last so the trace never paints over it.
            frame.stroke(
                &Path::rectangle(Point::new(plot.x, plot.y), plot.size()),
                Stroke::default()
                    .with_color(self.theme.grid.to_iced())
                    .with_width(1.0),
            );
        });

        vec![geometry]
    }
}

impl ChartProgram<'_> {
    fn draw_grid(&self, frame: &mut canvas::Frame, plot: Rectangle, scale: &ChartScale) {
        let grid_stroke = Stroke::default()
            .with_color(self.theme.grid.to_iced())
            .with_width(1.0);
        let label_color = self.theme.foreground.to_iced();
        let label_size = (self.theme.font_size - 2.0).max(8.0);
        let (x_min, x_max) = self.snapshot.x_range();

        for y in scale.y_ticks(Y_INTERVALS) {
            let left = scale.project(plot, x_min, y);
            if self.theme.show_grid {
                let right = scale.project(plot, x_max, y);
                frame.stroke(&Path::line(left, right), grid_stroke.clone());
            }
            frame.fill_text(Text {
                content: format!("{y:.0}"),
                position: Point::new(plot.x - 24.0, left.y - label_size * 0.6),
                color: label_color,
                size: label_size.into(),
                ..Text::default()
            });
        }

        let (y_min, y_max) = self.axes.y_range;
        for x in scale.x_ticks(X_INTERVALS) {
            let bottom = scale.project(plot, x, y_min);
            if self.theme.show_grid {
                let top = scale.project(plot, x, y_max);
                frame.stroke(&Path::line(bottom, top), grid_stroke.clone());
            }
            frame.fill_text(Text {
                content: format!("{x:.0}"),
                position: Point::new(bottom.x - 8.0, plot.y + plot.height + 4.0),
                color: label_color,
                size: label_size.into(),
                ..Text::default()
            });
        }
    }

    fn draw_axis_labels(&self, frame: &mut canvas::Frame, plot: Rectangle) {
        let color = self.theme.foreground.to_iced();
        let size = self.theme.font_size;
        // Left-aligned canvas text: offset by roughly half the rendered
        // width to fake centering.
        let half_width = |label: &str| label.len() as f32 * size * 0.27;

        frame.fill_text(Text {
            content: self.axes.x_label.clone(),
            position: Point::new(
                plot.x + plot.width / 2.0 - half_width(&self.axes.x_label),
                plot.y + plot.height + 20.0,
            ),
            color,
            size: size.into(),
            shaping: Shaping::Advanced,
            ..Text::default()
        });

        // Vertical label along the left edge, reading bottom-to-top.
        frame.with_save(|frame| {
            frame.translate(Vector::new(
                6.0,
                plot.y + plot.height / 2.0 + half_width(&self.axes.y_label),
            ));
            frame.rotate(-std::f32::consts::FRAC_PI_2);
            frame.fill_text(Text {
                content: self.axes.y_label.clone(),
                position: Point::ORIGIN,
                color,
                size: size.into(),
                shaping: Shaping::Advanced,
                ..Text::default()
            });
        });
    }

    fn draw_trace(&self, frame: &mut canvas::Frame, plot: Rectangle, scale: &ChartScale) {
        let line_color = self.theme.line.to_iced();

        if self.snapshot.len() >= 2 {
            let path = Path::new(|builder| {
                let mut points = self
                    .snapshot
                    .points
                    .iter()
                    .map(|&(t, v)| scale.project(plot, t as f32, v));
                if let Some(first) = points.next() {
                    builder.move_to(first);
                    for point in points {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(line_color)
                    .with_width(self.theme.line_width),
            );
        } else if let Some(&(t, v)) = self.snapshot.points.first() {
            // A one-sample trace has no extent; mark it with a dot.
            let center = scale.project(plot, t as f32, v);
            frame.fill(&Path::circle(center, 2.0), line_color);
        }
    }
}
