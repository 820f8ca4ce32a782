use coverflow_core::ConfigError;

/// Placement and event-handling settings for [`mount`](crate::mount).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebCarouselOptions {
    /// Selector, relative to the frame, of the element holding the items.
    /// `None` uses the frame itself as the track.
    pub track_selector: Option<String>,
    /// Coalesce resize events for this many milliseconds before
    /// rebuilding. `None` rebuilds on every resize event.
    pub resize_debounce_ms: Option<i32>,
}

impl Default for WebCarouselOptions {
    fn default() -> Self {
        Self {
            track_selector: Some(".coverflow-track".into()),
            resize_debounce_ms: None,
        }
    }
}

impl WebCarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track_selector(mut self, selector: impl Into<String>) -> Self {
        self.track_selector = Some(selector.into());
        self
    }

    /// Scroll and render into the frame element directly.
    pub fn with_frame_as_track(mut self) -> Self {
        self.track_selector = None;
        self
    }

    pub fn with_resize_debounce(mut self, millis: Option<i32>) -> Self {
        self.resize_debounce_ms = millis;
        self
    }

    /// Reads `data-track` and `data-resize-debounce-ms`.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(selector) = lookup("data-track") {
            options.track_selector = Some(selector);
        }
        if let Some(value) = lookup("data-resize-debounce-ms") {
            let millis: i32 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "resize-debounce-ms",
                    value: value.clone(),
                })?;
            if millis < 0 {
                return Err(ConfigError::OutOfRange {
                    key: "resize-debounce-ms",
                    reason: "must not be negative",
                });
            }
            options.resize_debounce_ms = (millis > 0).then_some(millis);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_rebuild_on_every_resize() {
        let options = WebCarouselOptions::from_attributes(|_| None).expect("defaults");
        assert_eq!(options, WebCarouselOptions::default());
        assert_eq!(options.resize_debounce_ms, None);
    }

    #[test]
    fn debounce_attribute_is_parsed() {
        let options = WebCarouselOptions::from_attributes(|key| match key {
            "data-resize-debounce-ms" => Some("150".into()),
            "data-track" => Some(".strip".into()),
            _ => None,
        })
        .expect("valid attributes");
        assert_eq!(options.resize_debounce_ms, Some(150));
        assert_eq!(options.track_selector.as_deref(), Some(".strip"));
    }

    #[test]
    fn zero_debounce_means_off() {
        let options = WebCarouselOptions::from_attributes(|key| {
            (key == "data-resize-debounce-ms").then(|| "0".to_string())
        })
        .expect("valid attributes");
        assert_eq!(options.resize_debounce_ms, None);
    }

    #[test]
    fn negative_debounce_is_rejected() {
        let err = WebCarouselOptions::from_attributes(|key| {
            (key == "data-resize-debounce-ms").then(|| "-5".to_string())
        })
        .expect_err("negative");
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }
}
