//! Seam handling.
//!
//! Autoscroll folds the position back once it passes two thirds of the
//! track. Drags can optionally be wrapped into the middle third by whole
//! periods so the loop also holds under fast, long drags.

use crate::config::FoldStrategy;
use crate::track::TrackLayout;

/// Applies the autoscroll fold. Returns the position unchanged while it is
/// below the seam threshold.
pub fn fold_position(position: f64, layout: &TrackLayout, strategy: FoldStrategy) -> f64 {
    let threshold = layout.seam_threshold();
    if layout.is_empty() || position < threshold {
        return position;
    }

    // With fewer than two copies a period step would leave the track.
    let folded = match strategy {
        FoldStrategy::Period if layout.repetitions >= 2 && layout.period() > 0.0 => {
            let period = layout.period();
            let steps = ((position - threshold) / period).floor() + 1.0;
            position - steps * period
        }
        _ => position / 2.0,
    };

    log::trace!("coverflow: fold {} -> {}", position, folded);
    folded
}

/// Wraps a drag position into `[track / 3, 2 * track / 3)` by whole
/// periods.
///
/// Returns the shift that was applied so the caller can move its drag
/// anchor by the same amount. Requires at least three copies; otherwise
/// the middle third is narrower than one period and the position is left
/// to the surface.
pub fn wrap_drag_position(position: f64, layout: &TrackLayout) -> f64 {
    let period = layout.period();
    if layout.repetitions < 3 || period <= 0.0 || !position.is_finite() {
        return 0.0;
    }

    let low = layout.track_width / 3.0;
    let high = layout.seam_threshold();

    if position >= high {
        let steps = ((position - high) / period).floor() + 1.0;
        -steps * period
    } else if position < low {
        let steps = ((low - position) / period).ceil();
        steps * period
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(repetitions: usize, track_width: f64) -> TrackLayout {
        TrackLayout {
            repetitions,
            track_width,
            item_count: 5,
            viewport_width: 900.0,
        }
    }

    #[test]
    fn halve_folds_at_threshold() {
        let layout = layout(3, 3000.0);
        assert_eq!(layout.seam_threshold(), 2000.0);
        assert_eq!(fold_position(2000.0, &layout, FoldStrategy::Halve), 1000.0);
        assert_eq!(fold_position(1999.5, &layout, FoldStrategy::Halve), 1999.5);
    }

    #[test]
    fn period_fold_keeps_phase() {
        let layout = layout(3, 3000.0);
        assert_eq!(fold_position(2000.0, &layout, FoldStrategy::Period), 1000.0);
        assert_eq!(fold_position(2250.0, &layout, FoldStrategy::Period), 1250.0);
        assert_eq!(fold_position(3100.0, &layout, FoldStrategy::Period), 1100.0);
    }

    #[test]
    fn period_fold_falls_back_to_halving_for_single_copy() {
        let layout = layout(1, 900.0);
        assert_eq!(fold_position(600.0, &layout, FoldStrategy::Period), 300.0);
    }

    #[test]
    fn empty_layout_never_folds() {
        let layout = TrackLayout::default();
        assert_eq!(fold_position(0.0, &layout, FoldStrategy::Halve), 0.0);
    }

    #[test]
    fn drag_wrap_shifts_by_whole_periods() {
        let layout = layout(6, 6000.0);
        // Middle third is [2000, 4000), period 1000.
        assert_eq!(wrap_drag_position(3000.0, &layout), 0.0);
        assert_eq!(wrap_drag_position(4000.0, &layout), -1000.0);
        assert_eq!(wrap_drag_position(5500.0, &layout), -2000.0);
        assert_eq!(wrap_drag_position(1999.0, &layout), 1000.0);
        assert_eq!(wrap_drag_position(-10.0, &layout), 3000.0);
    }

    #[test]
    fn drag_wrap_requires_three_copies() {
        let layout = layout(2, 2000.0);
        assert_eq!(wrap_drag_position(1900.0, &layout), 0.0);
        assert_eq!(wrap_drag_position(10.0, &layout), 0.0);
    }
}
