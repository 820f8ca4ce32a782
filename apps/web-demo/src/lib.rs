//! Entry point for the marketing page.
//!
//! Every element with the `coverflow` class becomes an independent
//! carousel, configured from its `data-*` attributes.

use coverflow_core::CarouselConfig;

/// Class marking a carousel frame in the page.
pub const CAROUSEL_SELECTOR: &str = ".coverflow";

/// Reads the carousel config for one element, falling back to defaults
/// when its attributes are malformed.
pub fn config_or_default<F>(lookup: F) -> CarouselConfig
where
    F: Fn(&str) -> Option<String>,
{
    CarouselConfig::from_attributes(lookup).unwrap_or_else(|err| {
        log::warn!("coverflow: invalid carousel attributes ({err}), using defaults");
        CarouselConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
mod web {
    use coverflow_platform_web::{mount, WebCarouselOptions};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    use super::{config_or_default, CAROUSEL_SELECTOR};

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let window = web_sys::window().ok_or("no global window exists")?;
        let document = window.document().ok_or("should have a document on window")?;
        let frames = document.query_selector_all(CAROUSEL_SELECTOR)?;

        for i in 0..frames.length() {
            let Some(node) = frames.item(i) else {
                continue;
            };
            let element: Element = node.dyn_into()?;
            let lookup = |key: &str| element.get_attribute(key);

            let config = config_or_default(lookup);
            let options = WebCarouselOptions::from_attributes(lookup).unwrap_or_else(|err| {
                log::warn!("coverflow: invalid frame attributes ({err}), using defaults");
                WebCarouselOptions::default()
            });

            let frame: HtmlElement = element.dyn_into()?;
            match mount(frame, options, config) {
                Ok(carousel) => log::info!(
                    "coverflow: mounted carousel {i} at {} ({:?})",
                    carousel.position(),
                    carousel.mode()
                ),
                // Keep mounting the remaining carousels.
                Err(err) => log::error!("coverflow: failed to mount carousel {i}: {err:?}"),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_attributes_fall_back_to_defaults() {
        let config = config_or_default(|key| (key == "data-speed").then(|| "quick".to_string()));
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn valid_attributes_are_applied() {
        let config = config_or_default(|key| (key == "data-speed").then(|| "12".to_string()));
        assert_eq!(config.speed, 12.0);
    }
}
