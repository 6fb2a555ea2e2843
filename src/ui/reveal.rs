//! Fade sections in the first time they scroll into view.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom::{intersection_observer, query_all};
use crate::core::reveal::{ANIMATE_IN_CLASS, ANIMATE_IN_STYLESHEET, HIDDEN_STYLE};
use crate::core::{Config, Reveal, SetupError};

/// Hide every reveal target and observe it. Returns the number of targets.
pub fn bind(document: &Document, config: &Config) -> Result<usize, SetupError> {
    let observer = intersection_observer(
        config.reveal_threshold,
        Some(&config.reveal_root_margin),
        |entry| {
            let target = entry.target();
            let classes = target.class_list();

            let mut reveal = Reveal::from_class(classes.contains(ANIMATE_IN_CLASS));
            if reveal.observe(entry.is_intersecting()) {
                let _ = classes.add_1(ANIMATE_IN_CLASS);
            }
        },
    )?;

    let targets = query_all(document, &config.reveal_selectors)?;
    for target in &targets {
        if let Some(element) = target.dyn_ref::<HtmlElement>() {
            let style = element.style();
            for (property, value) in HIDDEN_STYLE {
                style.set_property(property, value)?;
            }
        }
        observer.observe(target);
    }

    let head = document.head().ok_or(SetupError::MissingHead)?;
    let stylesheet = document.create_element("style")?;
    stylesheet.set_text_content(Some(ANIMATE_IN_STYLESHEET));
    head.append_child(&stylesheet)?;

    Ok(targets.len())
}
