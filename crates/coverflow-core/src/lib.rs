//! Core engine for the Coverflow infinite carousel.
//!
//! The engine keeps a strip of item clones long enough that it can scroll
//! forever without a visible reset. It is driven by abstract input events
//! (press, move, release, enter, leave, frame, resize) and talks to the
//! host through the [`TrackSurface`] trait, so the same state machine runs
//! in the browser and in headless tests.

pub mod config;
pub mod engine;
pub mod error;
pub mod fold;
pub mod frame_clock;
pub mod input;
pub mod item;
pub mod surface;
pub mod track;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{CarouselConfig, DragWrap, FoldStrategy};
pub use engine::{Carousel, DragAnchor};
pub use error::ConfigError;
pub use frame_clock::FrameClock;
pub use input::{CarouselEvent, EventResponse, Mode, PointerSource};
pub use item::{caption_for, ImageRef, ItemDescriptor};
pub use surface::TrackSurface;
pub use track::{build_loop, TrackLayout};

pub mod prelude {
    pub use crate::config::{CarouselConfig, DragWrap, FoldStrategy};
    pub use crate::engine::Carousel;
    pub use crate::input::{CarouselEvent, EventResponse, Mode, PointerSource};
    pub use crate::item::{ImageRef, ItemDescriptor};
    pub use crate::surface::TrackSurface;
}
