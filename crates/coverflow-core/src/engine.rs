//! The carousel state machine.
//!
//! [`Carousel`] owns every piece of mutable carousel state. Platforms feed
//! it abstract events and hand it a [`TrackSurface`] to read measurements
//! from and write the scroll offset to.

use crate::config::{CarouselConfig, DragWrap};
use crate::fold::{fold_position, wrap_drag_position};
use crate::frame_clock::FrameClock;
use crate::input::{CarouselEvent, EventResponse, Mode, PointerSource};
use crate::item::ItemDescriptor;
use crate::surface::TrackSurface;
use crate::track::{build_loop, TrackLayout};

/// Surface readbacks within this distance of the written value are treated
/// as rounding and ignored.
const RECONCILE_TOLERANCE: f64 = 1.0;

/// Pointer and scroll position captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub scroll_position: f64,
    pub source: PointerSource,
}

/// One infinitely looping carousel.
#[derive(Debug)]
pub struct Carousel {
    items: Vec<ItemDescriptor>,
    config: CarouselConfig,
    layout: TrackLayout,
    position: f64,
    mode: Mode,
    anchor: Option<DragAnchor>,
    pointer_inside: bool,
    clock: FrameClock,
}

impl Carousel {
    pub fn new(items: Vec<ItemDescriptor>, config: CarouselConfig) -> Self {
        let clock = FrameClock::new(config.max_frame_delta);
        Self {
            items,
            config,
            layout: TrackLayout::default(),
            position: 0.0,
            mode: Mode::Idle,
            anchor: None,
            pointer_inside: false,
            clock,
        }
    }

    pub fn items(&self) -> &[ItemDescriptor] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Current scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Builds the initial track.
    pub fn mount<S: TrackSurface + ?Sized>(&mut self, surface: &mut S) {
        self.rebuild(surface);
    }

    /// Rebuilds the track for the surface's current viewport and restarts
    /// from the midpoint in [`Mode::Idle`].
    pub fn rebuild<S: TrackSurface + ?Sized>(&mut self, surface: &mut S) {
        let viewport_width = surface.viewport_width();
        self.rebuild_for(viewport_width, surface);
    }

    fn rebuild_for<S: TrackSurface + ?Sized>(&mut self, viewport_width: f64, surface: &mut S) {
        self.layout = build_loop(&self.items, viewport_width, surface, &self.config);
        self.position = self.layout.midpoint();
        surface.set_scroll_offset(self.position);
        self.reset_interaction();
    }

    /// Reacts to a viewport change. Rebuilds when the width differs from
    /// the last build; interaction state is reset either way.
    pub fn resize<S: TrackSurface + ?Sized>(&mut self, viewport_width: f64, surface: &mut S) {
        if viewport_width != self.layout.viewport_width {
            log::debug!(
                "coverflow: viewport {} -> {}, rebuilding",
                self.layout.viewport_width,
                viewport_width
            );
            self.rebuild_for(viewport_width, surface);
        } else {
            self.reset_interaction();
        }
    }

    /// Per-frame tick. Converts the timestamp into a delta and autoscrolls.
    pub fn frame<S: TrackSurface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) {
        let delta = self.clock.tick(timestamp_ms);
        self.autoscroll(delta, surface);
    }

    /// Advances the position by `speed * delta_secs` when idle, folding it
    /// back at the seam threshold.
    pub fn autoscroll<S: TrackSurface + ?Sized>(&mut self, delta_secs: f64, surface: &mut S) {
        if self.mode != Mode::Idle || self.layout.is_empty() || self.layout.track_width <= 0.0 {
            return;
        }
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return;
        }

        let advanced = self.position + self.config.speed * delta_secs;
        let next = fold_position(advanced, &self.layout, self.config.fold);
        self.write_position(next, surface);
    }

    /// Starts a drag at pointer `x`.
    pub fn press<S: TrackSurface + ?Sized>(&mut self, x: f64, source: PointerSource, surface: &S) {
        if !x.is_finite() {
            return;
        }
        // Pick up whatever the surface holds if something else scrolled it.
        self.reconcile(surface.scroll_offset());
        self.anchor = Some(DragAnchor {
            pointer_x: x,
            scroll_position: self.position,
            source,
        });
        self.mode = Mode::Dragging;
    }

    /// Moves an active drag to pointer `x`. A missing coordinate leaves the
    /// drag untouched.
    pub fn drag_to<S: TrackSurface + ?Sized>(
        &mut self,
        x: Option<f64>,
        surface: &mut S,
    ) -> EventResponse {
        if self.mode != Mode::Dragging {
            return EventResponse::IGNORED;
        }
        let Some(mut anchor) = self.anchor else {
            return EventResponse::IGNORED;
        };
        let Some(x) = x.filter(|x| x.is_finite()) else {
            return EventResponse::CONSUMED;
        };

        let mut next = anchor.scroll_position + (anchor.pointer_x - x);
        if self.config.drag_wrap == DragWrap::Period {
            let shift = wrap_drag_position(next, &self.layout);
            if shift != 0.0 {
                log::trace!("coverflow: drag wrap {} by {}", next, shift);
                next += shift;
                anchor.scroll_position += shift;
                self.anchor = Some(anchor);
            }
        }

        self.write_position(next, surface);
        EventResponse::CONSUMED
    }

    /// Ends an active drag. A mouse still over the surface goes back to
    /// hovering; touch always resumes autoscroll.
    pub fn release(&mut self, source: PointerSource) {
        if self.mode != Mode::Dragging {
            return;
        }
        self.anchor = None;
        self.mode = match source {
            PointerSource::Mouse if self.pointer_inside => Mode::Hovering,
            _ => Mode::Idle,
        };
    }

    pub fn pointer_enter(&mut self) {
        self.pointer_inside = true;
        if self.mode != Mode::Dragging {
            self.mode = Mode::Hovering;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        if self.mode != Mode::Dragging {
            self.mode = Mode::Idle;
        }
    }

    /// Dispatches one abstract input event.
    pub fn handle<S: TrackSurface + ?Sized>(
        &mut self,
        event: CarouselEvent,
        surface: &mut S,
    ) -> EventResponse {
        match event {
            CarouselEvent::Press { x, source } => {
                self.press(x, source, surface);
                if self.mode == Mode::Dragging {
                    EventResponse::CONSUMED
                } else {
                    EventResponse::IGNORED
                }
            }
            CarouselEvent::Move { x } => self.drag_to(x, surface),
            CarouselEvent::Release { source } => {
                let was_dragging = self.mode == Mode::Dragging;
                self.release(source);
                EventResponse {
                    consumed: was_dragging,
                }
            }
            CarouselEvent::Enter => {
                self.pointer_enter();
                EventResponse::IGNORED
            }
            CarouselEvent::Leave => {
                self.pointer_leave();
                EventResponse::IGNORED
            }
            CarouselEvent::Frame { timestamp_ms } => {
                self.frame(timestamp_ms, surface);
                EventResponse::IGNORED
            }
            CarouselEvent::Resize { viewport_width } => {
                self.resize(viewport_width, surface);
                EventResponse::IGNORED
            }
        }
    }

    fn write_position<S: TrackSurface + ?Sized>(&mut self, position: f64, surface: &mut S) {
        self.position = position;
        surface.set_scroll_offset(position);
        self.reconcile(surface.scroll_offset());
    }

    /// Adopts the surface's offset when it clamped or otherwise moved away
    /// from the engine's value.
    fn reconcile(&mut self, actual: f64) {
        if actual.is_finite() && (actual - self.position).abs() > RECONCILE_TOLERANCE {
            log::trace!("coverflow: surface reports {} (engine {})", actual, self.position);
            self.position = actual;
        }
    }

    /// Ends any drag or hover. `pointer_inside` is left alone: the mouse
    /// does not move when the track is rebuilt under it.
    fn reset_interaction(&mut self) {
        self.mode = Mode::Idle;
        self.anchor = None;
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
