use super::*;
use crate::test_support::{items, StubSurface};

#[test]
fn five_items_fill_three_viewports() {
    let mut surface = StubSurface::new(900.0, 200.0);
    let layout = build_loop(&items(5), 900.0, &mut surface, &CarouselConfig::default());

    // 1000px per copy; 2700px target needs three copies.
    assert_eq!(layout.repetitions, 3);
    assert_eq!(layout.track_width, 3000.0);
    assert_eq!(layout.period(), 1000.0);
    assert_eq!(layout.midpoint(), 1500.0);
    assert_eq!(layout.seam_threshold(), 2000.0);
    assert_eq!(surface.appended.len(), 15);
}

#[test]
fn copies_preserve_order_and_captions() {
    let mut surface = StubSurface::new(300.0, 200.0);
    build_loop(&items(3), 300.0, &mut surface, &CarouselConfig::default());

    let indices: Vec<usize> = surface.appended.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(surface.appended[4].1, "Photo 1");
}

#[test]
fn zero_width_items_stop_at_cap() {
    let mut surface = StubSurface::new(900.0, 0.0);
    let layout = build_loop(&items(4), 900.0, &mut surface, &CarouselConfig::default());

    assert_eq!(layout.repetitions, 20);
    assert_eq!(layout.track_width, 0.0);
    assert_eq!(surface.appended.len(), 80);
}

#[test]
fn very_wide_viewport_stops_at_cap() {
    let mut surface = StubSurface::new(100_000.0, 10.0);
    let config = CarouselConfig::default().with_max_repetitions(5);
    let layout = build_loop(&items(2), 100_000.0, &mut surface, &config);

    assert_eq!(layout.repetitions, 5);
    assert_eq!(layout.track_width, 100.0);
}

#[test]
fn zero_viewport_builds_a_single_copy() {
    let mut surface = StubSurface::new(0.0, 200.0);
    let layout = build_loop(&items(5), 0.0, &mut surface, &CarouselConfig::default());
    assert_eq!(layout.repetitions, 1);
    assert_eq!(layout.track_width, 1000.0);
}

#[test]
fn non_finite_viewport_is_treated_as_zero() {
    let mut surface = StubSurface::new(0.0, 50.0);
    let layout = build_loop(&items(2), f64::NAN, &mut surface, &CarouselConfig::default());
    assert_eq!(layout.viewport_width, 0.0);
    assert_eq!(layout.repetitions, 1);
}

#[test]
fn empty_sequence_clears_and_builds_nothing() {
    let mut surface = StubSurface::new(900.0, 200.0);
    build_loop(&items(2), 900.0, &mut surface, &CarouselConfig::default());
    assert!(!surface.appended.is_empty());

    let layout = build_loop(&[], 900.0, &mut surface, &CarouselConfig::default());
    assert!(layout.is_empty());
    assert_eq!(layout.track_width, 0.0);
    assert_eq!(layout.period(), 0.0);
    assert!(surface.appended.is_empty());
    assert_eq!(surface.clears, 2);
}

#[test]
fn rebuild_replaces_previous_content() {
    let mut surface = StubSurface::new(900.0, 200.0);
    build_loop(&items(5), 900.0, &mut surface, &CarouselConfig::default());
    let layout = build_loop(&items(5), 400.0, &mut surface, &CarouselConfig::default());

    // 1200px target: two copies.
    assert_eq!(layout.repetitions, 2);
    assert_eq!(surface.appended.len(), 10);
}

#[test]
fn loop_factor_scales_target() {
    let mut surface = StubSurface::new(900.0, 200.0);
    let config = CarouselConfig::default().with_loop_factor(5.0);
    let layout = build_loop(&items(5), 900.0, &mut surface, &config);
    assert_eq!(layout.repetitions, 5);
    assert!(layout.track_width >= 4500.0);
}
