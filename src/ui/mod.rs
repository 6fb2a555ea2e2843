//! Browser bindings: look up the host page's elements and wire each
//! behavior model in `crate::core` to real events, observers and timers.

pub mod contact;
pub mod dom;
pub mod media;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod toast;

use leptos::logging::{error, log, warn};
use web_sys::{Document, Window};

use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::{Config, SetupError};

pub use toast::show_notification;

/// What setup found on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    pub sidebar_links: usize,
    pub anchor_links: usize,
    pub hover_videos: usize,
    pub observed_videos: usize,
    pub contact_form: bool,
    pub reveal_targets: usize,
}

impl Portfolio {
    /// Bind every behavior, stopping at the first missing required element.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &Config,
    ) -> Result<Self, SetupError> {
        let sidebar_links = nav::bind(document)?;
        let anchor_links = scroll::bind(window, document, config)?;
        let hover_videos = media::bind_hover(document)?;
        let observed_videos = media::bind_visibility(document, config)?;
        let contact_form = contact::bind(document, config)?;
        let reveal_targets = reveal::bind(document, config)?;

        Ok(Self {
            sidebar_links,
            anchor_links,
            hover_videos,
            observed_videos,
            contact_form,
            reveal_targets,
        })
    }
}

/// Read the optional `#portfolio-config` block, logging and ignoring a bad one.
pub fn load_config(document: &Document) -> Config {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let (config, err) = Config::from_optional_json(json.as_deref());
    if let Some(e) = err {
        warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
    }
    config
}

fn setup(window: &Window, document: &Document) {
    let config = load_config(document);

    match Portfolio::install(window, document, &config) {
        Ok(page) => log!(
            "Portfolio ready: {} panel links, {} anchors, {} hover videos, {} observed videos, contact form: {}, {} reveal targets",
            page.sidebar_links,
            page.anchor_links,
            page.hover_videos,
            page.observed_videos,
            page.contact_form,
            page.reveal_targets
        ),
        Err(e) => error!("Portfolio setup failed: {}", e),
    }
}

/// Hook setup onto the page lifecycle.
///
/// Setup runs on `DOMContentLoaded` and autoplay on window `load`; either runs
/// immediately if the module loads after its event has already fired.
pub fn start() -> Result<(), SetupError> {
    let (window, document) = dom::browser()?;

    let dom_ready = document.ready_state() != "loading";
    let page_loaded = document.ready_state() == "complete";

    let (ready_window, ready_document) = (window.clone(), document.clone());
    dom::when(&document, "DOMContentLoaded", dom_ready, move || {
        setup(&ready_window, &ready_document)
    })?;

    dom::when(&window, "load", page_loaded, move || {
        if let Err(e) = media::autoplay_all(&document) {
            error!("Video autoplay setup failed: {}", e);
        }
    })
}
