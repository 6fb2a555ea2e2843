//! Preview video playback decisions.
//!
//! Hover and visibility are two independent triggers. Neither knows about the
//! other, so a hovered video that scrolls out of view is paused by the
//! observer, and a visible video is rewound when the pointer leaves it.

/// Selector for videos that preview on hover
pub const HOVER_VIDEO_SELECTOR: &str = ".project-media video";

/// Selector for every video on the page
pub const VIDEO_SELECTOR: &str = "video";

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
pub const HAVE_CURRENT_DATA: u16 = 2;

/// What to do with a video element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    /// Pause and seek back to the first frame
    PauseAndRewind,
}

impl PlaybackCommand {
    pub fn on_pointer_enter() -> Self {
        PlaybackCommand::Play
    }

    pub fn on_pointer_leave() -> Self {
        PlaybackCommand::PauseAndRewind
    }

    /// Decision for a visibility observer entry
    pub fn on_visibility(is_intersecting: bool) -> Self {
        if is_intersecting {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        }
    }

    /// Seek target after applying the command, if the command seeks
    pub fn seek_to(&self) -> Option<f64> {
        match self {
            PlaybackCommand::PauseAndRewind => Some(0.0),
            _ => None,
        }
    }
}

/// Whether a video can start right away or must wait for `loadeddata`
pub fn has_current_data(ready_state: u16) -> bool {
    ready_state >= HAVE_CURRENT_DATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_plays() {
        assert_eq!(PlaybackCommand::on_pointer_enter(), PlaybackCommand::Play);
    }

    #[test]
    fn test_leave_pauses_and_rewinds() {
        let cmd = PlaybackCommand::on_pointer_leave();
        assert_eq!(cmd, PlaybackCommand::PauseAndRewind);
        assert_eq!(cmd.seek_to(), Some(0.0));
    }

    #[test]
    fn test_visibility_decisions() {
        assert_eq!(PlaybackCommand::on_visibility(true), PlaybackCommand::Play);
        assert_eq!(PlaybackCommand::on_visibility(false), PlaybackCommand::Pause);
        assert_eq!(PlaybackCommand::on_visibility(false).seek_to(), None);
    }

    #[test]
    fn test_ready_state_gate() {
        assert!(!has_current_data(0));
        assert!(!has_current_data(1));
        assert!(has_current_data(2));
        assert!(has_current_data(4));
    }
}
