use thermo_core::SampleHistory;

/// Immutable copy of the sample history, taken once per redraw tick.
///
/// The chart renders exclusively from the latest snapshot — it has no
/// identity of its own and is rebuilt wholesale every tick.
#[derive(Debug, Clone, Default)]
pub struct TraceSnapshot {
    /// `(timestamp, °C)` pairs, oldest first.
    pub points:   Vec<(u64, f32)>,
    /// Samples ever appended, including evicted ones.
    pub total:    u64,
    /// History window size.
    pub capacity: usize,
    /// Newest reading, if any.
    pub latest:   Option<f32>,
}

impl TraceSnapshot {
    pub fn from_history(history: &SampleHistory) -> Self {
        Self {
            points:   history.iter().collect(),
            total:    history.total_appended(),
            capacity: history.capacity(),
            latest:   history.latest(),
        }
    }

    /// Horizontal axis range: `[0, max(total, capacity)]`.
    ///
    /// The axis never spans less than one full window, and keeps growing
    /// with the append count once the window has been exceeded, so the
    /// trace scrolls right.
    pub fn x_range(&self) -> (f32, f32) {
        (0.0, self.total.max(self.capacity as u64) as f32)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_spans_one_window() {
        let snapshot = TraceSnapshot::from_history(&SampleHistory::new(100));
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.x_range(), (0.0, 100.0));
    }

    #[test]
    fn y_values_keep_arrival_order() {
        let mut history = SampleHistory::new(100);
        for v in [20.1, 21.0, 19.5] {
            history.push(v);
        }
        let snapshot = TraceSnapshot::from_history(&history);
        let ys: Vec<f32> = snapshot.points.iter().map(|&(_, v)| v).collect();
        assert_eq!(ys, vec![20.1, 21.0, 19.5]);
        // Well under one window: the axis still spans the full capacity.
        assert_eq!(snapshot.x_range(), (0.0, 100.0));
    }

    #[test]
    fn axis_grows_past_the_window() {
        let mut history = SampleHistory::new(100);
        for i in 0..105 {
            history.push(i as f32);
        }
        let snapshot = TraceSnapshot::from_history(&history);
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot.x_range(), (0.0, 105.0));
        // The oldest surviving point sits at its original timestamp.
        assert_eq!(snapshot.points.first(), Some(&(5, 5.0)));
        assert_eq!(snapshot.latest, Some(104.0));
    }
}
