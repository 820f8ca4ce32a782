//! Minimal in-crate surface for unit tests.

use crate::item::{ImageRef, ItemDescriptor};
use crate::surface::TrackSurface;

#[derive(Debug, Default)]
pub(crate) struct StubSurface {
    pub viewport: f64,
    pub item_width: f64,
    pub appended: Vec<(usize, String)>,
    pub offset: f64,
    pub clears: usize,
}

impl StubSurface {
    pub fn new(viewport: f64, item_width: f64) -> Self {
        Self {
            viewport,
            item_width,
            ..Self::default()
        }
    }
}

impl TrackSurface for StubSurface {
    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn clear_track(&mut self) {
        self.appended.clear();
        self.clears += 1;
    }

    fn append_item(&mut self, index: usize, _item: &ItemDescriptor, caption: &str) {
        self.appended.push((index, caption.to_string()));
    }

    fn track_width(&self) -> f64 {
        self.appended.len() as f64 * self.item_width
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.track_width());
    }
}

pub(crate) fn items(count: usize) -> Vec<ItemDescriptor> {
    (0..count)
        .map(|i| {
            ItemDescriptor::new(
                ImageRef::new(format!("img/{i}.jpg"), format!("Photo {i}")),
                format!("Item {i}"),
            )
        })
        .collect()
}
