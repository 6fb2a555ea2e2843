//! Transient slide-in notification.

use super::config::Config;

/// Inline style of a toast; it starts off-screen to the right
pub const TOAST_STYLE: &str = "position: fixed; \
    top: 20px; \
    right: 20px; \
    background: linear-gradient(135deg, #00ff88, #00ccff); \
    color: white; \
    padding: 1rem 2rem; \
    border-radius: 8px; \
    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); \
    z-index: 10000; \
    transform: translateX(100%); \
    transition: transform 0.3s ease;";

/// Lifecycle stage of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    /// Appended but still off-screen
    Offscreen,
    /// Slid into view
    Shown,
    /// Sliding back out
    Leaving,
    /// Detached from the document
    Removed,
}

impl ToastStage {
    /// Inline `transform` for the stage, `None` once removed
    pub fn transform(&self) -> Option<&'static str> {
        match self {
            ToastStage::Offscreen | ToastStage::Leaving => Some("translateX(100%)"),
            ToastStage::Shown => Some("translateX(0)"),
            ToastStage::Removed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Stage changes with their offset from the moment the toast is shown.
    ///
    /// Entering and leaving are scheduled from creation independently; the
    /// removal follows the leave by the exit transition.
    pub fn timeline(config: &Config) -> Vec<(u32, ToastStage)> {
        let leave_at = config.toast_visible_ms;
        let mut timeline = vec![
            (config.toast_enter_delay_ms, ToastStage::Shown),
            (leave_at, ToastStage::Leaving),
            (
                leave_at.saturating_add(config.toast_exit_ms),
                ToastStage::Removed,
            ),
        ];
        timeline.sort_by_key(|&(at, _)| at);
        timeline
    }

    /// Timeline converted to delays relative to the previous stage
    pub fn steps(config: &Config) -> Vec<(u32, ToastStage)> {
        let mut previous = 0u32;
        Self::timeline(config)
            .into_iter()
            .map(|(at, stage)| {
                let delay = at - previous;
                previous = at;
                (delay, stage)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeline() {
        assert_eq!(
            Toast::timeline(&Config::default()),
            vec![
                (100, ToastStage::Shown),
                (3000, ToastStage::Leaving),
                (3300, ToastStage::Removed),
            ]
        );
    }

    #[test]
    fn test_steps_are_relative() {
        assert_eq!(
            Toast::steps(&Config::default()),
            vec![
                (100, ToastStage::Shown),
                (2900, ToastStage::Leaving),
                (300, ToastStage::Removed),
            ]
        );
    }

    #[test]
    fn test_short_visible_time_keeps_order() {
        let config = Config {
            toast_enter_delay_ms: 500,
            toast_visible_ms: 200,
            ..Config::default()
        };

        let stages: Vec<ToastStage> = Toast::timeline(&config)
            .into_iter()
            .map(|(_, stage)| stage)
            .collect();
        assert_eq!(
            stages,
            vec![ToastStage::Leaving, ToastStage::Shown, ToastStage::Removed]
        );
    }

    #[test]
    fn test_stage_transforms() {
        assert_eq!(ToastStage::Offscreen.transform(), Some("translateX(100%)"));
        assert_eq!(ToastStage::Shown.transform(), Some("translateX(0)"));
        assert_eq!(ToastStage::Leaving.transform(), Some("translateX(100%)"));
        assert_eq!(ToastStage::Removed.transform(), None);
    }

    #[test]
    fn test_style_starts_offscreen() {
        assert!(TOAST_STYLE.contains("position: fixed;"));
        assert!(TOAST_STYLE.contains("z-index: 10000;"));
        assert!(TOAST_STYLE.contains("transform: translateX(100%);"));
    }
}
