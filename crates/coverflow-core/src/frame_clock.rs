use std::time::Duration;

/// Turns per-frame timestamps into elapsed seconds.
///
/// The first frame after construction or [`reset`](Self::reset) yields a
/// zero delta, as does a timestamp that goes backwards.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    max_delta: Option<Duration>,
}

impl FrameClock {
    pub fn new(max_delta: Option<Duration>) -> Self {
        Self {
            last_timestamp_ms: None,
            max_delta,
        }
    }

    /// Records `timestamp_ms` and returns seconds since the previous frame.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let previous = self.last_timestamp_ms.replace(timestamp_ms);
        let Some(previous) = previous else {
            return 0.0;
        };

        let delta = ((timestamp_ms - previous) / 1000.0).max(0.0);
        match self.max_delta {
            Some(max) => delta.min(max.as_secs_f64()),
            None => delta,
        }
    }

    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1_000.0), 0.0);
        assert_eq!(clock.tick(1_500.0), 0.5);
    }

    #[test]
    fn backwards_timestamp_is_zero() {
        let mut clock = FrameClock::default();
        clock.tick(2_000.0);
        assert_eq!(clock.tick(1_000.0), 0.0);
        assert_eq!(clock.tick(1_250.0), 0.25);
    }

    #[test]
    fn max_delta_caps_long_gaps() {
        let mut clock = FrameClock::new(Some(Duration::from_millis(100)));
        clock.tick(0.0);
        assert_eq!(clock.tick(5_000.0), 0.1);
    }

    #[test]
    fn reset_forgets_previous_frame() {
        let mut clock = FrameClock::default();
        clock.tick(100.0);
        clock.reset();
        assert_eq!(clock.last_timestamp_ms(), None);
        assert_eq!(clock.tick(900.0), 0.0);
    }
}
