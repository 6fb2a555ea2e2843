//! Error types for page setup and configuration loading.

/// Errors raised while binding behaviors to the host document.
///
/// Setup stops at the first error; nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("no global `window` available")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("document has no <body>")]
    MissingBody,

    #[error("document has no <head>")]
    MissingHead,

    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl SetupError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

/// Errors raised while reading the page's configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },

    #[error("scroll_threshold_px must not be negative, got {0}")]
    NegativeScrollThreshold(f64),

    #[error("reveal_selectors has an empty entry: {0:?}")]
    EmptySelector(String),

    #[error("reveal_root_margin must be 1 to 4 px or % lengths, got {0:?}")]
    InvalidRootMargin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message_names_selector() {
        let err = SetupError::missing(".menu-icon");
        assert_eq!(err.to_string(), "required element not found: .menu-icon");
    }

    #[test]
    fn test_missing_submit_button_names_form_and_button() {
        let err = SetupError::missing("#contactForm button[type=\"submit\"]");
        assert_eq!(
            err.to_string(),
            "required element not found: #contactForm button[type=\"submit\"]"
        );
    }

    #[test]
    fn test_config_parse_error_wraps_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(err.to_string().starts_with("config is not valid JSON"));
    }
}
