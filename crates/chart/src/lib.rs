pub mod scale;
pub mod trace;
pub mod widget;

pub use scale::ChartScale;
pub use trace::TraceSnapshot;
pub use widget::TemperatureChart;
