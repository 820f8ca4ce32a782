//! Loop construction.
//!
//! The track is the original item sequence repeated until it is several
//! viewports wide. Content is periodic, so any offset can be moved by a
//! whole number of copies without a visible change.

use crate::config::CarouselConfig;
use crate::item::{caption_for, ItemDescriptor};
use crate::surface::TrackSurface;

/// Measurements of the last loop build.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TrackLayout {
    /// Number of full copies of the sequence on the track.
    pub repetitions: usize,
    /// Cumulative rendered width reported by the surface after the build.
    pub track_width: f64,
    /// Length of the original sequence.
    pub item_count: usize,
    /// Viewport width the build targeted.
    pub viewport_width: f64,
}

impl TrackLayout {
    pub fn is_empty(&self) -> bool {
        self.repetitions == 0 || self.item_count == 0
    }

    /// Width of a single copy of the sequence.
    pub fn period(&self) -> f64 {
        if self.repetitions == 0 {
            0.0
        } else {
            self.track_width / self.repetitions as f64
        }
    }

    /// Offset the engine starts from after every build.
    pub fn midpoint(&self) -> f64 {
        self.track_width / 2.0
    }

    /// Offset at which autoscroll folds the position back.
    pub fn seam_threshold(&self) -> f64 {
        self.track_width / 1.5
    }
}

/// Rebuilds the track on `surface` for `viewport_width`.
///
/// Appends whole copies of `items` until the track is at least
/// `loop_factor` viewports wide or `max_repetitions` copies exist. A
/// non-empty sequence always gets at least one copy; an empty one leaves
/// the track empty.
pub fn build_loop<S>(
    items: &[ItemDescriptor],
    viewport_width: f64,
    surface: &mut S,
    config: &CarouselConfig,
) -> TrackLayout
where
    S: TrackSurface + ?Sized,
{
    surface.clear_track();

    let viewport_width = if viewport_width.is_finite() {
        viewport_width.max(0.0)
    } else {
        0.0
    };

    if items.is_empty() {
        log::debug!("coverflow: no items, track left empty");
        return TrackLayout {
            viewport_width,
            ..TrackLayout::default()
        };
    }

    let target = config.loop_factor * viewport_width;
    let max_repetitions = config.max_repetitions.max(1);
    let mut repetitions = 0;

    let track_width = loop {
        for (index, item) in items.iter().enumerate() {
            surface.append_item(index, item, caption_for(item));
        }
        repetitions += 1;
        let width = surface.track_width();

        if width >= target {
            break width;
        }
        if repetitions >= max_repetitions {
            log::debug!(
                "coverflow: repetition cap {} reached at width {} (target {})",
                max_repetitions,
                width,
                target
            );
            break width;
        }
    };

    log::debug!(
        "coverflow: built {} copies of {} items, track width {} for viewport {}",
        repetitions,
        items.len(),
        track_width,
        viewport_width
    );

    TrackLayout {
        repetitions,
        track_width,
        item_count: items.len(),
        viewport_width,
    }
}

#[cfg(test)]
#[path = "tests/track_tests.rs"]
mod tests;
