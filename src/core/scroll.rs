//! Header scroll state and in-page anchor resolution.

pub const HEADER_SELECTOR: &str = "header";

/// Class the header carries once the page has scrolled past the threshold
pub const SCROLLED_CLASS: &str = "scrolled";

/// Selector for links that scroll within the page
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Whether the header should carry the `scrolled` class.
///
/// A plain level comparison: strictly past the threshold.
pub fn header_is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Extract the target id from an in-page link's `href`.
///
/// Returns `None` for a bare `#` or for anything that is not a fragment link.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold_is_strict() {
        assert!(!header_is_scrolled(0.0, 100.0));
        assert!(!header_is_scrolled(99.5, 100.0));
        assert!(!header_is_scrolled(100.0, 100.0));
        assert!(header_is_scrolled(100.5, 100.0));
        assert!(header_is_scrolled(2400.0, 100.0));
    }

    #[test]
    fn test_header_reverts_when_scrolling_back() {
        let offsets = [0.0, 150.0, 300.0, 90.0];
        let states: Vec<bool> = offsets
            .iter()
            .map(|&y| header_is_scrolled(y, 100.0))
            .collect();

        assert_eq!(states, vec![false, true, true, false]);
    }

    #[test]
    fn test_anchor_target_id() {
        assert_eq!(anchor_target_id("#projects"), Some("projects"));
        assert_eq!(anchor_target_id("#contact-me"), Some("contact-me"));
    }

    #[test]
    fn test_anchor_without_target() {
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id(""), None);
        assert_eq!(anchor_target_id("/about#team"), None);
    }
}
