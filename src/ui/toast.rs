//! Slide-in toast notification.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use super::dom::cast;
use crate::core::toast::TOAST_STYLE;
use crate::core::{Config, SetupError, Toast, ToastStage};

/// Append a toast to the page and schedule its slide in, slide out and removal.
///
/// Every call runs its own timer chain; toasts are not deduplicated.
pub fn show_notification(
    document: &Document,
    toast: &Toast,
    config: &Config,
) -> Result<(), SetupError> {
    let body = document.body().ok_or(SetupError::MissingBody)?;

    let element: HtmlElement = cast(document.create_element("div")?, "toast")?;
    element.style().set_css_text(TOAST_STYLE);
    element.set_text_content(Some(&toast.message));
    body.append_child(&element)?;

    let steps = Toast::steps(config);
    spawn_local(async move {
        for (delay, stage) in steps {
            TimeoutFuture::new(delay).await;
            render(&element, stage);
        }
    });

    Ok(())
}

fn render(element: &HtmlElement, stage: ToastStage) {
    match stage.transform() {
        Some(transform) => {
            let _ = element.style().set_property("transform", transform);
        }
        None => element.remove(),
    }
}
