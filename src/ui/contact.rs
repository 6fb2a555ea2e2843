//! Simulated contact form submission.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use super::dom::{cast, listen};
use super::toast::show_notification;
use crate::core::contact::{FORM_ID, SUBMIT_BUTTON_SELECTOR};
use crate::core::{ButtonView, Config, SetupError, SubmissionPlan, SubmissionStep, Toast};

/// One in-flight submission
struct Submission {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    original_label: String,
    document: Document,
    config: Config,
}

impl Submission {
    fn apply(&self, step: SubmissionStep) {
        if step == SubmissionStep::Reset {
            self.form.reset();
        }

        render_button(&self.button, &step.phase().view(&self.original_label));

        if step == SubmissionStep::Reset {
            let toast = Toast::new(self.config.success_message.clone());
            if let Err(e) = show_notification(&self.document, &toast, &self.config) {
                error!("Failed to show notification: {}", e);
            }
        }
    }
}

fn render_button(button: &HtmlButtonElement, view: &ButtonView<'_>) {
    button.set_inner_html(view.label_html);
    button.set_disabled(view.disabled);

    let style = button.style();
    let _ = if view.background.is_empty() {
        style.remove_property("background").map(drop)
    } else {
        style.set_property("background", view.background)
    };
}

/// Take over `#contactForm` submits. Returns `false` when the page has no form.
pub fn bind(document: &Document, config: &Config) -> Result<bool, SetupError> {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        log!("No #{} on this page, contact form disabled", FORM_ID);
        return Ok(false);
    };
    let form: HtmlFormElement = cast(form, FORM_ID)?;

    let plan = SubmissionPlan::from_config(config);
    let target = form.clone();
    let document = document.clone();
    let config = config.clone();

    listen(&target, "submit", move |event| {
        event.prevent_default();

        // A form without a typed submit button only loses this submission
        let button = match submit_button(&form) {
            Ok(button) => button,
            Err(e) => {
                error!("Contact form submit ignored: {}", e);
                return;
            }
        };

        let submission = Submission {
            form: form.clone(),
            original_label: button.inner_html(),
            button,
            document: document.clone(),
            config: config.clone(),
        };
        run(submission, &plan);
    })?;

    Ok(true)
}

fn submit_button(form: &HtmlFormElement) -> Result<HtmlButtonElement, SetupError> {
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)?
        .ok_or_else(|| SetupError::missing(format!("#{} {}", FORM_ID, SUBMIT_BUTTON_SELECTOR)))?;
    cast(button, SUBMIT_BUTTON_SELECTOR)
}

fn run(submission: Submission, plan: &SubmissionPlan) {
    for &step in plan.immediate() {
        submission.apply(step);
    }

    let deferred = plan.deferred().to_vec();
    spawn_local(async move {
        for (delay, step) in deferred {
            TimeoutFuture::new(delay).await;
            submission.apply(step);
        }
    });
}
