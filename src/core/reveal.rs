//! One-shot fade-in of page sections.

/// Class that brings a section into its final position
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Inline styles applied before an element is observed
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Stylesheet injected into `<head>`; `!important` beats the inline styles
pub const ANIMATE_IN_STYLESHEET: &str = "
.animate-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
";

/// Reveal state of a single element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the state from whether the element already has the class
    pub fn from_class(has_animate_in: bool) -> Self {
        Self {
            revealed: has_animate_in,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one observer entry.
    ///
    /// Returns `true` only for the entry that reveals the element. Leaving
    /// the viewport afterwards never hides it again.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_intersecting() {
        let mut reveal = Reveal::new();

        assert!(!reveal.observe(false));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_reveals_exactly_once() {
        let mut reveal = Reveal::new();
        let entries = [false, true, false, true, true, false];

        let transitions = entries.iter().filter(|&&i| reveal.observe(i)).count();

        assert_eq!(transitions, 1);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_already_revealed_element_stays() {
        let mut reveal = Reveal::from_class(true);
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_hidden_style_and_stylesheet_agree() {
        assert!(HIDDEN_STYLE.contains(&("opacity", "0")));
        assert!(ANIMATE_IN_STYLESHEET.contains(".animate-in"));
        assert!(ANIMATE_IN_STYLESHEET.contains("opacity: 1 !important;"));
        assert!(ANIMATE_IN_STYLESHEET.contains("transform: translateY(0) !important;"));
    }
}
