//! Testing utilities and harness for Coverflow

pub mod assertions;
pub mod driver;
pub mod surface;

pub use assertions::assert_approx_eq;
pub use driver::FrameDriver;
pub use surface::{MemorySurface, RenderedItem};

use coverflow_core::{ImageRef, ItemDescriptor};

/// `count` items named after their index, with alt text `Photo {i}`.
pub fn sample_items(count: usize) -> Vec<ItemDescriptor> {
    (0..count)
        .map(|i| {
            ItemDescriptor::new(
                ImageRef::new(format!("images/{i}.jpg"), format!("Photo {i}")),
                format!("Item {i}"),
            )
        })
        .collect()
}

/// Installs a test logger once. Safe to call from every test.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// No-op without the `logging` feature.
#[cfg(not(feature = "logging"))]
pub fn init_logging() {}

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::driver::FrameDriver;
    pub use crate::surface::{MemorySurface, RenderedItem};
    pub use crate::{init_logging, sample_items};
}
