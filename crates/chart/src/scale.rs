use iced::{Point, Rectangle};

/// Maps data coordinates into a plot rectangle.
///
/// Data y grows upward, screen y grows downward; the projection inverts
/// the vertical axis so `y_min` lands on the plot's bottom edge.
#[derive(Debug, Clone, Copy)]
pub struct ChartScale {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl ChartScale {
    /// Degenerate spans (max ≤ min) are widened by one unit so the
    /// projection stays finite.
    pub fn new((x_min, x_max): (f32, f32), (y_min, y_max): (f32, f32)) -> Self {
        Self {
            x_min,
            x_max: if x_max > x_min { x_max } else { x_min + 1.0 },
            y_min,
            y_max: if y_max > y_min { y_max } else { y_min + 1.0 },
        }
    }

    /// Project a data point into `plot`.
    pub fn project(&self, plot: Rectangle, x: f32, y: f32) -> Point {
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);
        Point::new(plot.x + fx * plot.width, plot.y + (1.0 - fy) * plot.height)
    }

    /// `intervals + 1` evenly spaced tick values across the x axis,
    /// endpoints included.
    pub fn x_ticks(&self, intervals: usize) -> Vec<f32> {
        ticks(self.x_min, self.x_max, intervals)
    }

    /// `intervals + 1` evenly spaced tick values across the y axis,
    /// endpoints included.
    pub fn y_ticks(&self, intervals: usize) -> Vec<f32> {
        ticks(self.y_min, self.y_max, intervals)
    }
}

fn ticks(min: f32, max: f32, intervals: usize) -> Vec<f32> {
    let intervals = intervals.max(1);
    let step = (max - min) / intervals as f32;
    (0..=intervals).map(|i| min + step * i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLOT: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn corners_project_to_plot_edges() {
        let scale = ChartScale::new((0.0, 100.0), (15.0, 40.0));

        let bottom_left = scale.project(PLOT, 0.0, 15.0);
        assert_eq!((bottom_left.x, bottom_left.y), (0.0, 100.0));

        let top_right = scale.project(PLOT, 100.0, 40.0);
        assert_eq!((top_right.x, top_right.y), (200.0, 0.0));
    }

    #[test]
    fn midpoint_projects_to_plot_center() {
        let scale = ChartScale::new((0.0, 100.0), (15.0, 40.0));
        let center = scale.project(PLOT, 50.0, 27.5);
        assert_eq!((center.x, center.y), (100.0, 50.0));
    }

    #[test]
    fn offset_plot_origin_is_respected() {
        let plot = Rectangle {
            x: 40.0,
            y: 10.0,
            ..PLOT
        };
        let scale = ChartScale::new((0.0, 10.0), (0.0, 10.0));
        let p = scale.project(plot, 0.0, 10.0);
        assert_eq!((p.x, p.y), (40.0, 10.0));
    }

    #[test]
    fn degenerate_ranges_stay_finite() {
        let scale = ChartScale::new((0.0, 0.0), (20.0, 20.0));
        let p = scale.project(PLOT, 0.0, 20.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn ticks_include_both_endpoints() {
        let scale = ChartScale::new((0.0, 100.0), (15.0, 40.0));
        assert_eq!(scale.x_ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(scale.y_ticks(5), vec![15.0, 20.0, 25.0, 30.0, 35.0, 40.0]);
    }
}
