//! Video hover previews, visibility playback and initial autoplay.

use leptos::logging::log;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlMediaElement};

use super::dom::{intersection_observer, listen, query_all};
use crate::core::media::{HOVER_VIDEO_SELECTOR, VIDEO_SELECTOR, has_current_data};
use crate::core::{Config, PlaybackCommand, SetupError};

/// Request playback; a rejected play promise is logged and dropped.
fn play(video: &HtmlMediaElement, rejected: &'static str) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log!("{}: {:?}", rejected, e);
            }
        }),
        Err(e) => log!("{}: {:?}", rejected, e),
    }
}

fn apply(video: &HtmlMediaElement, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Play => play(video, "Video playback prevented"),
        PlaybackCommand::Pause | PlaybackCommand::PauseAndRewind => {
            let _ = video.pause();
        }
    }

    if let Some(time) = command.seek_to() {
        video.set_current_time(time);
    }
}

fn videos(document: &Document, selector: &str) -> Result<Vec<HtmlMediaElement>, SetupError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlMediaElement>().ok())
        .collect())
}

/// Play project previews while hovered. Returns the number of videos bound.
pub fn bind_hover(document: &Document) -> Result<usize, SetupError> {
    let previews = videos(document, HOVER_VIDEO_SELECTOR)?;

    for video in &previews {
        let target = video.clone();
        listen(video, "mouseenter", move |_| {
            apply(&target, PlaybackCommand::on_pointer_enter())
        })?;

        let target = video.clone();
        listen(video, "mouseleave", move |_| {
            apply(&target, PlaybackCommand::on_pointer_leave())
        })?;
    }

    Ok(previews.len())
}

/// Play videos while enough of them is on screen. Returns the number observed.
pub fn bind_visibility(document: &Document, config: &Config) -> Result<usize, SetupError> {
    let observer = intersection_observer(config.video_visibility_threshold, None, |entry| {
        if let Ok(video) = entry.target().dyn_into::<HtmlMediaElement>() {
            apply(&video, PlaybackCommand::on_visibility(entry.is_intersecting()));
        }
    })?;

    let all = videos(document, VIDEO_SELECTOR)?;
    for video in &all {
        observer.observe(video);
    }

    Ok(all.len())
}

/// Try to start every video on the page once it has data to show.
pub fn autoplay_all(document: &Document) -> Result<(), SetupError> {
    for video in videos(document, VIDEO_SELECTOR)? {
        if has_current_data(video.ready_state()) {
            play(&video, "Video autoplay prevented");
            continue;
        }

        let target = video.clone();
        listen(&video, "loadeddata", move |_| {
            play(&target, "Video autoplay prevented")
        })?;
    }

    Ok(())
}
