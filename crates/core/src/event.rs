/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Reading source (dora / simulate / local) → `Reading`, `SourceClosed`
/// - Redraw timer subscription               → `Redraw`
/// - Config watcher task                     → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// A fresh temperature reading in °C from the active source.
    Reading(f32),
    /// The source's event stream is exhausted — no further readings will
    /// arrive. The chart keeps rendering whatever is in the history.
    SourceClosed,
    /// Fixed-cadence redraw tick — snapshots the history and repaints.
    Redraw,
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}
