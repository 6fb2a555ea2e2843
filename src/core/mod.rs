//! Platform-independent behavior models for the portfolio page.
//!
//! Everything in here is plain Rust: the browser bindings in `crate::ui`
//! ask these models what to do and apply the answer to the DOM.

pub mod config;
pub mod contact;
pub mod error;
pub mod media;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod toast;

pub use config::Config;
pub use contact::{ButtonView, SubmissionPlan, SubmissionStep, SubmitPhase};
pub use error::{ConfigError, SetupError};
pub use media::PlaybackCommand;
pub use nav::NavPanel;
pub use reveal::Reveal;
pub use scroll::{anchor_target_id, header_is_scrolled};
pub use toast::{Toast, ToastStage};
