pub mod decode;
pub mod dora;
pub mod local;
pub mod simulate;

/// Event emitted by every reading source.
///
/// All three sources (dora subscription, simulator, local sensors) forward
/// these through a bounded channel; the UI owns the receiving end and is the
/// only mutator of the sample history.
#[derive(Debug, Clone, Copy)]
pub enum SourceEvent {
    /// A fresh temperature reading in °C.
    Reading(f32),
    /// The source will emit no further readings.
    Closed,
}
