//! Item descriptors read from the page markup.

/// Opaque reference to an item's image.
///
/// The engine never loads or validates images; it only carries the source
/// and alt text through to the surface and derives captions from the alt.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// One entry of the fixed, ordered item sequence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemDescriptor {
    pub image: ImageRef,
    pub label: String,
}

impl ItemDescriptor {
    pub fn new(image: ImageRef, label: impl Into<String>) -> Self {
        Self {
            image,
            label: label.into(),
        }
    }
}

/// Caption attached to every rendered clone.
///
/// Uses the trimmed alt text, falling back to the label when the alt is
/// blank.
pub fn caption_for(item: &ItemDescriptor) -> &str {
    let alt = item.image.alt.trim();
    if alt.is_empty() {
        item.label.trim()
    } else {
        alt
    }
}
