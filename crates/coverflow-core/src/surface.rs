//! Rendering surface abstraction.
//!
//! The engine never touches a DOM directly. Hosts implement
//! [`TrackSurface`] to expose measured widths, the scroll offset and the
//! track's child list.

use crate::item::ItemDescriptor;

/// The scrollable frame plus the track it contains.
pub trait TrackSurface {
    /// Width of the visible carousel frame, queried on demand.
    fn viewport_width(&self) -> f64;

    /// Removes every rendered clone from the track.
    fn clear_track(&mut self);

    /// Appends one clone of the item at `index` in the original sequence,
    /// tagged with `caption`.
    fn append_item(&mut self, index: usize, item: &ItemDescriptor, caption: &str);

    /// Cumulative rendered width of the track, queried on demand.
    fn track_width(&self) -> f64;

    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Writes the horizontal scroll offset. The surface may clamp it to its
    /// own bounds; reading it back must return the stored value.
    fn set_scroll_offset(&mut self, offset: f64);
}
