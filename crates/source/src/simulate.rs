use crate::SourceEvent;
use rand::Rng;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time;

// Waveform constants: room-temperature baseline with a slow sine trend and
// uniform noise, same shape the reference sensor node emits.
const BASE_TEMP: f32 = 25.0;
const TREND_AMPLITUDE: f32 = 3.0;
const TREND_RATE: f32 = 0.01;
const NOISE_BOUND: f32 = 2.0;

/// Spawn a background Tokio task that synthesizes a temperature reading
/// every `interval_ms` milliseconds — lets the visualizer run standalone,
/// with no dataflow runtime behind it.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_simulator(interval_ms: u64) -> mpsc::Receiver<SourceEvent> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms.max(10));

    tokio::spawn(async move {
        let start = Instant::now();
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            let noise = rand::rng().random_range(-NOISE_BOUND..NOISE_BOUND);
            let value = waveform(start.elapsed().as_secs_f32(), noise);

            if tx.send(SourceEvent::Reading(value)).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}

fn waveform(elapsed_secs: f32, noise: f32) -> f32 {
    BASE_TEMP + (elapsed_secs * TREND_RATE).sin() * TREND_AMPLITUDE + noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_stays_inside_default_chart_range() {
        // Worst case: full trend swing plus extreme noise must stay inside
        // the default 15–40 °C axis.
        for step in 0..10_000 {
            let elapsed = step as f32 * 0.1;
            for noise in [-NOISE_BOUND, 0.0, NOISE_BOUND] {
                let v = waveform(elapsed, noise);
                assert!((15.0..40.0).contains(&v), "out of range: {v}");
            }
        }
    }

    #[test]
    fn waveform_is_noise_free_at_zero() {
        assert_eq!(waveform(0.0, 0.0), BASE_TEMP);
    }
}
