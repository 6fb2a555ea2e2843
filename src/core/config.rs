//! Page behavior configuration.
//!
//! Every timing and threshold the behaviors use lives here. The host page can
//! override any subset of fields with a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "scroll_threshold_px": 80 }
//! </script>
//! ```

use serde::Deserialize;

use super::error::ConfigError;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Behavior configuration. Missing fields fall back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scroll offset past which the header gets the `scrolled` class
    pub scroll_threshold_px: f64,

    /// Delay between "Sending..." and "Message Sent!"
    pub submit_success_delay_ms: u32,

    /// Delay between "Message Sent!" and the form reset
    pub submit_reset_delay_ms: u32,

    /// Delay before a toast slides in
    pub toast_enter_delay_ms: u32,

    /// Time from toast creation until it starts sliding out
    pub toast_visible_ms: u32,

    /// Length of the toast exit transition before the node is removed
    pub toast_exit_ms: u32,

    /// Fraction of a video that must be visible for it to play
    pub video_visibility_threshold: f64,

    /// Fraction of a section that must be visible before it is revealed
    pub reveal_threshold: f64,

    /// Observer root margin for the reveal animation
    pub reveal_root_margin: String,

    /// Selector list of elements that fade in on first view
    pub reveal_selectors: String,

    /// Text of the toast shown after a simulated submission
    pub success_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            submit_success_delay_ms: 1500,
            submit_reset_delay_ms: 2000,
            toast_enter_delay_ms: 100,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
            video_visibility_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_selectors: ".service-card, .project-item, .about-content, .contact-content"
                .to_string(),
            success_message: "Message sent successfully! We'll get back to you soon.".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON override block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are usable by the browser observers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("video_visibility_threshold", self.video_visibility_threshold)?;
        check_ratio("reveal_threshold", self.reveal_threshold)?;

        if self.scroll_threshold_px < 0.0 {
            return Err(ConfigError::NegativeScrollThreshold(
                self.scroll_threshold_px,
            ));
        }

        if self.reveal_selectors.split(',').any(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptySelector(self.reveal_selectors.clone()));
        }

        if !is_root_margin(&self.reveal_root_margin) {
            return Err(ConfigError::InvalidRootMargin(
                self.reveal_root_margin.clone(),
            ));
        }

        Ok(())
    }

    /// Parse an optional override block, falling back to defaults.
    ///
    /// Returns the error alongside the defaults so the caller can log it.
    pub fn from_optional_json(json: Option<&str>) -> (Self, Option<ConfigError>) {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

/// One to four lengths, each in `px` or `%`, as `IntersectionObserver` accepts
fn is_root_margin(margin: &str) -> bool {
    let lengths: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&lengths.len()) && lengths.iter().all(|length| is_length(length))
}

fn is_length(length: &str) -> bool {
    length
        .strip_suffix("px")
        .or_else(|| length.strip_suffix('%'))
        .is_some_and(|number| number.parse::<f64>().is_ok_and(f64::is_finite))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = Config::default();

        assert_eq!(config.scroll_threshold_px, 100.0);
        assert_eq!(config.submit_success_delay_ms, 1500);
        assert_eq!(config.submit_reset_delay_ms, 2000);
        assert_eq!(config.toast_enter_delay_ms, 100);
        assert_eq!(config.toast_visible_ms, 3000);
        assert_eq!(config.toast_exit_ms, 300);
    }

    #[test]
    fn test_default_observer_settings() {
        let config = Config::default();

        assert_eq!(config.video_visibility_threshold, 0.5);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert!(config.reveal_selectors.contains(".service-card"));
        assert!(config.reveal_selectors.contains(".contact-content"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "scroll_threshold_px": 80 }"#).unwrap();

        assert_eq!(config.scroll_threshold_px, 80.0);
        assert_eq!(config.submit_success_delay_ms, 1500);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = Config::from_json("{ scroll_threshold_px: }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let result = Config::from_json(r#"{ "reveal_threshold": 1.5 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::ThresholdOutOfRange {
                field: "reveal_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_scroll_threshold_rejected() {
        let result = Config::from_json(r#"{ "scroll_threshold_px": -1 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::NegativeScrollThreshold(_))
        ));
    }

    #[test]
    fn test_empty_selector_list_rejected() {
        let result = Config::from_json(r#"{ "reveal_selectors": "" }"#);
        assert!(matches!(result, Err(ConfigError::EmptySelector(_))));

        let result = Config::from_json(r#"{ "reveal_selectors": "   " }"#);
        assert!(matches!(result, Err(ConfigError::EmptySelector(_))));
    }

    #[test]
    fn test_selector_list_with_empty_entry_rejected() {
        let result = Config::from_json(r#"{ "reveal_selectors": ".service-card, " }"#);
        assert!(matches!(result, Err(ConfigError::EmptySelector(_))));

        let result = Config::from_json(r#"{ "reveal_selectors": ".a,,.b" }"#);
        assert!(matches!(result, Err(ConfigError::EmptySelector(_))));
    }

    #[test]
    fn test_invalid_root_margin_rejected() {
        for margin in ["lots", "", "0", "10px 20px 30px 40px 50px", "10em", "px", "-50"] {
            let json = format!(r#"{{ "reveal_root_margin": "{}" }}"#, margin);
            let result = Config::from_json(&json);
            assert!(
                matches!(result, Err(ConfigError::InvalidRootMargin(_))),
                "accepted {:?}",
                margin
            );
        }
    }

    #[test]
    fn test_valid_root_margins_accepted() {
        for margin in ["0px", "10%", "0px -50px", "0px 0px -50px 0px", "1.5px 2% 0px"] {
            let json = format!(r#"{{ "reveal_root_margin": "{}" }}"#, margin);
            let config = Config::from_json(&json).unwrap();
            assert_eq!(config.reveal_root_margin, margin);
        }
    }

    #[test]
    fn test_invalid_reveal_override_falls_back_to_defaults() {
        let json = r#"{ "reveal_selectors": "", "reveal_root_margin": "lots" }"#;
        let (config, err) = Config::from_optional_json(Some(json));

        assert_eq!(config, Config::default());
        assert!(err.is_some());
    }

    #[test]
    fn test_optional_json_absent_or_blank() {
        let (config, err) = Config::from_optional_json(None);
        assert_eq!(config, Config::default());
        assert!(err.is_none());

        let (config, err) = Config::from_optional_json(Some("   \n"));
        assert_eq!(config, Config::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_optional_json_invalid_falls_back() {
        let (config, err) = Config::from_optional_json(Some("not json"));
        assert_eq!(config, Config::default());
        assert!(err.is_some());
    }
}
