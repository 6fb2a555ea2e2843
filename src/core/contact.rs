//! Simulated contact form submission.
//!
//! Nothing is sent anywhere. A submission walks the submit button through
//! a fixed sequence of timed states and always ends in success.

use super::config::Config;

/// Id of the optional contact form
pub const FORM_ID: &str = "contactForm";

/// Selector for the submit control inside the form
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

pub const SENDING_LABEL: &str = "<i class=\"bx bx-loader-alt bx-spin\"></i> Sending...";
pub const SENT_LABEL: &str = "<i class=\"bx bx-check\"></i> Message Sent!";
pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #00ff88, #00ccff)";

/// Visible phase of the submit button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// How the submit button should look in a given phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView<'a> {
    pub label_html: &'a str,
    pub disabled: bool,
    /// Inline `background` value; empty clears it
    pub background: &'static str,
}

impl SubmitPhase {
    /// Button presentation for this phase.
    ///
    /// `original_label` is the button markup captured when the submission
    /// started, restored once the sequence completes.
    pub fn view<'a>(&self, original_label: &'a str) -> ButtonView<'a> {
        match self {
            SubmitPhase::Idle => ButtonView {
                label_html: original_label,
                disabled: false,
                background: "",
            },
            SubmitPhase::Sending => ButtonView {
                label_html: SENDING_LABEL,
                disabled: true,
                background: "",
            },
            SubmitPhase::Sent => ButtonView {
                label_html: SENT_LABEL,
                disabled: true,
                background: SUCCESS_BACKGROUND,
            },
        }
    }
}

/// One timed step of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStep {
    /// Disable the button and show the pending label
    Sending,
    /// Show the success label and styling
    Sent,
    /// Reset the fields, restore the button and show the toast
    Reset,
}

impl SubmissionStep {
    pub fn phase(&self) -> SubmitPhase {
        match self {
            SubmissionStep::Sending => SubmitPhase::Sending,
            SubmissionStep::Sent => SubmitPhase::Sent,
            SubmissionStep::Reset => SubmitPhase::Idle,
        }
    }
}

/// Steps of a submission.
///
/// The immediate steps run inside the submit handler, so the button is
/// disabled before the handler returns. Every deferred step waits on a timer,
/// even with a zero delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    immediate: Vec<SubmissionStep>,
    deferred: Vec<(u32, SubmissionStep)>,
}

impl SubmissionPlan {
    pub fn from_config(config: &Config) -> Self {
        Self {
            immediate: vec![SubmissionStep::Sending],
            deferred: vec![
                (config.submit_success_delay_ms, SubmissionStep::Sent),
                (config.submit_reset_delay_ms, SubmissionStep::Reset),
            ],
        }
    }

    /// Steps applied synchronously on submit
    pub fn immediate(&self) -> &[SubmissionStep] {
        &self.immediate
    }

    /// Timed steps, each with its delay after the previous one
    pub fn deferred(&self) -> &[(u32, SubmissionStep)] {
        &self.deferred
    }

    /// Steps with their offset from the moment of submission
    pub fn timeline(&self) -> Vec<(u32, SubmissionStep)> {
        let mut at = 0u32;
        let deferred = self.deferred.iter().map(|&(delay, step)| {
            at = at.saturating_add(delay);
            (at, step)
        });

        self.immediate
            .iter()
            .map(|&step| (0, step))
            .chain(deferred)
            .collect()
    }

    /// Phase the button is in `elapsed_ms` after submission
    pub fn phase_at(&self, elapsed_ms: u32) -> SubmitPhase {
        self.timeline()
            .into_iter()
            .take_while(|&(at, _)| at <= elapsed_ms)
            .last()
            .map(|(_, step)| step.phase())
            .unwrap_or_default()
    }
}
