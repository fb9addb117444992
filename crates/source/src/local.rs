use crate::SourceEvent;
use std::time::Duration;
use sysinfo::Components;
use tokio::sync::mpsc;
use tokio::time;
use tracing::warn;

/// Spawn a background Tokio task that samples the host's thermal sensors
/// every `interval_ms` milliseconds.
///
/// `sensor_label` selects a sensor by case-insensitive substring match on
/// its label; when unset, the hottest sensor wins.  The task stops
/// automatically when the receiver is dropped.
pub fn spawn_local(interval_ms: u64, sensor_label: Option<String>) -> mpsc::Receiver<SourceEvent> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms.max(100));

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        let mut warned = false;

        loop {
            ticker.tick().await;

            // Re-enumerate each poll — sensors can come and go across
            // suspend/resume.
            let components = Components::new_with_refreshed_list();
            let readings = components
                .iter()
                .filter_map(|c| c.temperature().map(|t| (c.label().to_string(), t)));

            match select_sensor(readings, sensor_label.as_deref()) {
                Some(value) => {
                    warned = false;
                    if tx.send(SourceEvent::Reading(value)).await.is_err() {
                        break; // all receivers dropped
                    }
                }
                None => {
                    if !warned {
                        warned = true;
                        warn!(
                            "No thermal sensor matched (label filter: {:?})",
                            sensor_label
                        );
                    }
                }
            }
        }
    });

    rx
}

/// Pick a reading from `(label, temperature)` pairs: the label filter wins
/// over the hottest-sensor fallback.
fn select_sensor<I>(readings: I, label: Option<&str>) -> Option<f32>
where
    I: IntoIterator<Item = (String, f32)>,
{
    let needle = label.map(str::to_lowercase);
    let mut hottest: Option<f32> = None;

    for (sensor, temp) in readings {
        match &needle {
            Some(n) => {
                if sensor.to_lowercase().contains(n) {
                    return Some(temp);
                }
            }
            None => hottest = Some(hottest.map_or(temp, |h| h.max(temp))),
        }
    }

    hottest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> Vec<(String, f32)> {
        vec![
            ("coretemp Core 0".to_string(), 55.0),
            ("nvme Composite".to_string(), 41.5),
            ("acpitz temp1".to_string(), 62.0),
        ]
    }

    #[test]
    fn hottest_sensor_wins_without_filter() {
        assert_eq!(select_sensor(readings(), None), Some(62.0));
    }

    #[test]
    fn label_filter_is_case_insensitive_substring() {
        assert_eq!(select_sensor(readings(), Some("NVME")), Some(41.5));
    }

    #[test]
    fn unmatched_filter_yields_nothing() {
        assert_eq!(select_sensor(readings(), Some("gpu")), None);
    }

    #[test]
    fn no_sensors_yields_nothing() {
        assert_eq!(select_sensor(Vec::new(), None), None);
    }
}
