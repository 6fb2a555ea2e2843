//! Off-canvas navigation panel state.

pub const MENU_ICON_SELECTOR: &str = ".menu-icon";
pub const CLOSE_ICON_SELECTOR: &str = ".close-icon";
pub const SIDEBAR_SELECTOR: &str = ".sidebar";
/// Links inside the panel; following one closes it
pub const SIDEBAR_LINK_SELECTOR: &str = "a";

/// Class added to the panel while it is open
pub const OPEN_CLASS: &str = "open";

/// Body `overflow` value that locks background scrolling
pub const SCROLL_LOCK: &str = "hidden";

/// Open/closed state of the mobile navigation panel.
///
/// The panel class and the body scroll lock are both derived from the one
/// flag, so the page can never show an open panel with a scrollable body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavPanel {
    open: bool,
}

impl NavPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel. Opening an open panel is a no-op.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the panel. Closing a closed panel is a no-op.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Body `overflow` value for the current state; empty clears the override
    pub fn body_overflow(&self) -> &'static str {
        if self.open { SCROLL_LOCK } else { "" }
    }
}
