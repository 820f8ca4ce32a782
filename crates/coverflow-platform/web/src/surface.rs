//! DOM-backed [`TrackSurface`].

use coverflow_core::{ImageRef, ItemDescriptor, TrackSurface};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

pub const CAPTION_CLASS: &str = "coverflow-caption";

/// The scroll container (`frame`) and the element holding the clones
/// (`track`). They may be the same element.
pub struct DomSurface {
    document: Document,
    frame: HtmlElement,
    track: Element,
    templates: Vec<Node>,
}

impl DomSurface {
    /// Captures the track's current children as templates and returns the
    /// item sequence they describe.
    pub fn from_markup(
        document: Document,
        frame: HtmlElement,
        track: Element,
    ) -> Result<(Self, Vec<ItemDescriptor>), JsValue> {
        let children = track.children();
        let mut templates = Vec::with_capacity(children.length() as usize);
        let mut items = Vec::with_capacity(children.length() as usize);

        for i in 0..children.length() {
            let Some(child) = children.item(i) else {
                continue;
            };
            items.push(describe_item(&child)?);
            templates.push(child.clone_node_with_deep(true)?);
        }

        log::debug!("coverflow: read {} items from markup", items.len());

        Ok((
            Self {
                document,
                frame,
                track,
                templates,
            },
            items,
        ))
    }

    fn try_append(&self, index: usize, caption: &str) -> Result<(), JsValue> {
        let template = self
            .templates
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("no template for item {index}")))?;
        let node = template.clone_node_with_deep(true)?;
        let label = self.document.create_element("span")?;
        label.set_class_name(CAPTION_CLASS);
        label.set_text_content(Some(caption));
        node.append_child(&label)?;
        self.track.append_child(&node)?;
        Ok(())
    }
}

impl TrackSurface for DomSurface {
    fn viewport_width(&self) -> f64 {
        f64::from(self.frame.client_width())
    }

    fn clear_track(&mut self) {
        self.track.set_text_content(None);
    }

    fn append_item(&mut self, index: usize, _item: &ItemDescriptor, caption: &str) {
        if let Err(err) = self.try_append(index, caption) {
            log::warn!("coverflow: failed to append item {}: {:?}", index, err);
        }
    }

    fn track_width(&self) -> f64 {
        f64::from(self.track.scroll_width())
    }

    fn scroll_offset(&self) -> f64 {
        f64::from(self.frame.scroll_left())
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_left(offset);
        options.set_behavior(ScrollBehavior::Instant);
        self.frame.scroll_to_with_scroll_to_options(&options);
    }
}

/// Reads `{ image, label }` from one item element.
///
/// The image comes from the first `<img>` inside the element. The label is
/// `data-label` when present, otherwise the element's trimmed text.
fn describe_item(element: &Element) -> Result<ItemDescriptor, JsValue> {
    let image = match element.query_selector("img")? {
        Some(img) => ImageRef::new(
            img.get_attribute("src").unwrap_or_default(),
            img.get_attribute("alt").unwrap_or_default(),
        ),
        None => ImageRef::default(),
    };

    let label = element
        .get_attribute("data-label")
        .or_else(|| element.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    Ok(ItemDescriptor::new(image, label))
}
