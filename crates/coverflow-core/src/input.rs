//! Abstract input events and interaction modes.

/// Which device class started a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Who may move the scroll position on a given frame.
///
/// Exactly one mode is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Autoscroll advances the position each frame.
    #[default]
    Idle,
    /// A mouse is over the surface; autoscroll is frozen.
    Hovering,
    /// A press is active; only moves change the position.
    Dragging,
}

/// Input delivered to [`Carousel::handle`](crate::Carousel::handle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    Press { x: f64, source: PointerSource },
    /// `x` is `None` when the platform event carried no usable coordinate.
    Move { x: Option<f64> },
    Release { source: PointerSource },
    Enter,
    Leave,
    /// Display refresh with a monotonically increasing timestamp.
    Frame { timestamp_ms: f64 },
    Resize { viewport_width: f64 },
}

/// Result of handling one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The engine took ownership of the gesture; the platform should
    /// suppress its native pan/scroll behaviour for this event.
    pub consumed: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self { consumed: false };
    pub const CONSUMED: Self = Self { consumed: true };
}
