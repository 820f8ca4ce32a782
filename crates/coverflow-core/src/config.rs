//! Carousel tuning knobs.
//!
//! Defaults reproduce the marketing page as shipped: 30 px/s autoscroll,
//! a track three viewports wide, at most 20 copies, the halving seam fold
//! and period wrapping while dragging.

use std::time::Duration;

use crate::error::ConfigError;

/// Default autoscroll speed in pixels per second.
pub const DEFAULT_SPEED: f64 = 30.0;

/// Default track width as a multiple of the viewport width.
pub const DEFAULT_LOOP_FACTOR: f64 = 3.0;

/// Smallest accepted loop factor. Below three viewports the seam threshold
/// (`track / 1.5`) lies past the maximum scroll offset of a real scroll
/// container (`track - viewport`), so autoscroll would stall at the clamp.
pub const MIN_LOOP_FACTOR: f64 = 3.0;

/// Default cap on the number of copies appended by a loop build.
pub const DEFAULT_MAX_REPETITIONS: usize = 20;

/// How autoscroll brings the position back once it crosses the seam
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldStrategy {
    /// Halve the position. Lands on an equivalent offset only when the
    /// copies are uniform and the position is a whole number of periods.
    #[default]
    Halve,
    /// Subtract whole periods (the width of one copy) until the position is
    /// back under the threshold.
    Period,
}

/// Whether drag moves are wrapped back into the middle of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragWrap {
    /// Shift by whole periods when a drag leaves the middle third.
    #[default]
    Period,
    /// Hand drag positions to the surface unchanged.
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Autoscroll speed in pixels per second.
    pub speed: f64,
    /// Minimum track width as a multiple of the viewport width.
    pub loop_factor: f64,
    /// Hard limit on copies per build; guards against zero-width inputs.
    pub max_repetitions: usize,
    pub fold: FoldStrategy,
    pub drag_wrap: DragWrap,
    /// Upper bound for a single frame delta. `None` keeps real time.
    pub max_frame_delta: Option<Duration>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            loop_factor: DEFAULT_LOOP_FACTOR,
            max_repetitions: DEFAULT_MAX_REPETITIONS,
            fold: FoldStrategy::default(),
            drag_wrap: DragWrap::default(),
            max_frame_delta: None,
        }
    }
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_loop_factor(mut self, factor: f64) -> Self {
        self.loop_factor = factor;
        self
    }

    pub fn with_max_repetitions(mut self, max: usize) -> Self {
        self.max_repetitions = max;
        self
    }

    pub fn with_fold(mut self, fold: FoldStrategy) -> Self {
        self.fold = fold;
        self
    }

    pub fn with_drag_wrap(mut self, wrap: DragWrap) -> Self {
        self.drag_wrap = wrap;
        self
    }

    pub fn with_max_frame_delta(mut self, max: Option<Duration>) -> Self {
        self.max_frame_delta = max;
        self
    }

    /// Checks that every value is usable by the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "speed",
                reason: "must be a finite, non-negative number",
            });
        }
        if !self.loop_factor.is_finite() || self.loop_factor < MIN_LOOP_FACTOR {
            return Err(ConfigError::OutOfRange {
                key: "loop-factor",
                reason: "must be at least 3",
            });
        }
        if self.max_repetitions == 0 {
            return Err(ConfigError::OutOfRange {
                key: "max-repetitions",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Builds a config from `data-*` style attributes.
    ///
    /// `lookup` receives the full attribute name (for example
    /// `data-speed`) and returns its value if present. Missing attributes
    /// keep their defaults.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("data-speed") {
            config.speed = parse_number("speed", &value)?;
        }
        if let Some(value) = lookup("data-loop-factor") {
            config.loop_factor = parse_number("loop-factor", &value)?;
        }
        if let Some(value) = lookup("data-max-repetitions") {
            config.max_repetitions =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: "max-repetitions",
                        value: value.clone(),
                    })?;
        }
        if let Some(value) = lookup("data-fold") {
            config.fold = match value.trim().to_ascii_lowercase().as_str() {
                "halve" => FoldStrategy::Halve,
                "period" => FoldStrategy::Period,
                _ => {
                    return Err(ConfigError::UnknownVariant {
                        key: "fold",
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup("data-drag-wrap") {
            config.drag_wrap = match value.trim().to_ascii_lowercase().as_str() {
                "period" => DragWrap::Period,
                "none" => DragWrap::None,
                _ => {
                    return Err(ConfigError::UnknownVariant {
                        key: "drag-wrap",
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup("data-max-frame-delta-ms") {
            let millis = parse_number("max-frame-delta-ms", &value)?;
            let delta = Duration::try_from_secs_f64(millis / 1000.0).map_err(|_| {
                ConfigError::OutOfRange {
                    key: "max-frame-delta-ms",
                    reason: "must be a non-negative duration",
                }
            })?;
            config.max_frame_delta = Some(delta);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_attributes_keep_defaults() {
        let config = CarouselConfig::from_attributes(attrs(&[])).expect("defaults are valid");
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.speed, 30.0);
        assert_eq!(config.max_repetitions, 20);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = CarouselConfig::from_attributes(attrs(&[
            ("data-speed", "45.5"),
            ("data-loop-factor", "4"),
            ("data-max-repetitions", " 12 "),
            ("data-fold", "Period"),
            ("data-drag-wrap", "none"),
            ("data-max-frame-delta-ms", "250"),
        ]))
        .expect("attributes parse");

        assert_eq!(config.speed, 45.5);
        assert_eq!(config.loop_factor, 4.0);
        assert_eq!(config.max_repetitions, 12);
        assert_eq!(config.fold, FoldStrategy::Period);
        assert_eq!(config.drag_wrap, DragWrap::None);
        assert_eq!(config.max_frame_delta, Some(Duration::from_millis(250)));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = CarouselConfig::from_attributes(attrs(&[("data-speed", "fast")]))
            .expect_err("speed must be numeric");
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "speed",
                value: "fast".into()
            }
        );
        assert_eq!(err.to_string(), "speed: 'fast' is not a number");
    }

    #[test]
    fn loop_factor_below_three_viewports_is_rejected() {
        let err = CarouselConfig::from_attributes(attrs(&[("data-loop-factor", "2")]))
            .expect_err("two viewports cannot reach the seam");
        assert_eq!(
            err,
            ConfigError::OutOfRange {
                key: "loop-factor",
                reason: "must be at least 3",
            }
        );
    }

    #[test]
    fn unknown_fold_is_rejected() {
        let err = CarouselConfig::from_attributes(attrs(&[("data-fold", "modulo")]))
            .expect_err("unknown fold");
        assert!(matches!(err, ConfigError::UnknownVariant { key: "fold", .. }));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert!(CarouselConfig::new().with_speed(-1.0).validate().is_err());
        assert!(CarouselConfig::new().with_speed(f64::NAN).validate().is_err());
        assert!(CarouselConfig::new().with_loop_factor(0.5).validate().is_err());
        assert!(CarouselConfig::new().with_loop_factor(2.99).validate().is_err());
        assert!(CarouselConfig::new().with_loop_factor(3.0).validate().is_ok());
        assert!(CarouselConfig::new().with_max_repetitions(0).validate().is_err());
        assert!(CarouselConfig::new().with_speed(0.0).validate().is_ok());
    }
}
