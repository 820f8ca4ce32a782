//! In-memory [`TrackSurface`] with fixed item widths.

use coverflow_core::{ItemDescriptor, TrackSurface};

/// A clone appended to the track.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem {
    pub index: usize,
    pub label: String,
    pub caption: String,
}

/// Headless surface that behaves like a scroll container: every item is
/// `item_width` wide and the scroll offset is clamped to
/// `[0, track_width - viewport_width]`, the range a browser can reach.
#[derive(Debug)]
pub struct MemorySurface {
    viewport_width: f64,
    item_width: f64,
    items: Vec<RenderedItem>,
    scroll_offset: f64,
    rebuilds: usize,
    writes: usize,
}

impl MemorySurface {
    pub fn new(viewport_width: f64, item_width: f64) -> Self {
        Self {
            viewport_width,
            item_width,
            items: Vec::new(),
            scroll_offset: 0.0,
            rebuilds: 0,
            writes: 0,
        }
    }

    /// Changes the viewport, as a window resize would.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Changes the width reported for every item, e.g. once images load.
    pub fn set_item_width(&mut self, width: f64) {
        self.item_width = width;
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn captions(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.caption.as_str()).collect()
    }

    /// Number of times the track was cleared.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Number of scroll offset writes.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Largest offset the surface accepts.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.track_width() - self.viewport_width).max(0.0)
    }
}

impl TrackSurface for MemorySurface {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn clear_track(&mut self) {
        self.items.clear();
        self.rebuilds += 1;
    }

    fn append_item(&mut self, index: usize, item: &ItemDescriptor, caption: &str) {
        self.items.push(RenderedItem {
            index,
            label: item.label.clone(),
            caption: caption.to_string(),
        });
    }

    fn track_width(&self) -> f64 {
        self.items.len() as f64 * self.item_width
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.writes += 1;
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
    }
}
