use coverflow_core::{Carousel, CarouselEvent, TrackSurface};

/// Feeds frame events at a fixed interval, like a display refreshing at a
/// steady rate.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    now_ms: f64,
    interval_ms: f64,
}

impl FrameDriver {
    /// Starts at `start_ms` and advances by `interval_ms` per frame.
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            interval_ms,
        }
    }

    /// ~60 FPS starting at zero.
    pub fn sixty_fps() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Delivers the current timestamp, then advances the clock.
    pub fn step<S: TrackSurface + ?Sized>(&mut self, carousel: &mut Carousel, surface: &mut S) {
        carousel.handle(
            CarouselEvent::Frame {
                timestamp_ms: self.now_ms,
            },
            surface,
        );
        self.now_ms += self.interval_ms;
    }

    /// Delivers `frames` frames and returns the positions seen after each.
    pub fn run<S: TrackSurface + ?Sized>(
        &mut self,
        frames: usize,
        carousel: &mut Carousel,
        surface: &mut S,
    ) -> Vec<f64> {
        let mut positions = Vec::with_capacity(frames);
        for _ in 0..frames {
            self.step(carousel, surface);
            positions.push(carousel.position());
        }
        positions
    }
}
