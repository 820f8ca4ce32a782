//! Browser events to engine events.

use coverflow_core::{CarouselEvent, PointerSource};
use web_sys::{MouseEvent, TouchEvent};

pub fn mouse_x(event: &MouseEvent) -> Option<f64> {
    Some(f64::from(event.client_x()))
}

/// X of the first active touch. `None` once every finger is lifted or
/// when the browser delivers an empty list.
pub fn touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}

pub fn mouse_press(event: &MouseEvent) -> Option<CarouselEvent> {
    // Primary button only.
    if event.button() != 0 {
        return None;
    }
    mouse_x(event).map(|x| CarouselEvent::Press {
        x,
        source: PointerSource::Mouse,
    })
}

pub fn touch_press(event: &TouchEvent) -> Option<CarouselEvent> {
    touch_x(event).map(|x| CarouselEvent::Press {
        x,
        source: PointerSource::Touch,
    })
}

/// Browsers replay mouse events after a tap. Mouse events this soon after
/// a touch are treated as replays.
pub const COMPAT_MOUSE_WINDOW_MS: f64 = 800.0;

/// Remembers the last touch so replayed mouse events can be dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchGuard {
    last_touch_ms: Option<f64>,
}

impl TouchGuard {
    pub fn record_touch(&mut self, timestamp_ms: f64) {
        self.last_touch_ms = Some(timestamp_ms);
    }

    /// Whether a mouse event at `timestamp_ms` is a replay of a tap.
    pub fn is_replay(&self, timestamp_ms: f64) -> bool {
        match self.last_touch_ms {
            Some(last) => {
                let elapsed = timestamp_ms - last;
                (0.0..COMPAT_MOUSE_WINDOW_MS).contains(&elapsed)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_without_touch_is_never_a_replay() {
        assert!(!TouchGuard::default().is_replay(10.0));
    }

    #[test]
    fn mouse_shortly_after_touch_is_a_replay() {
        let mut guard = TouchGuard::default();
        guard.record_touch(1_000.0);
        assert!(guard.is_replay(1_000.0));
        assert!(guard.is_replay(1_500.0));
        assert!(!guard.is_replay(1_800.0));
        assert!(!guard.is_replay(900.0));
    }
}
