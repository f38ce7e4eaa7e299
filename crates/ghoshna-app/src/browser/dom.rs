use std::time::Duration;

use leptos::prelude::{request_animation_frame, set_timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlAudioElement, HtmlElement};

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Loads `path`, immediately or once `delay` has passed.
pub fn navigate(path: &str, delay: Duration) {
    let path = path.to_string();
    let go = move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(&path) {
            log::error!("navigation to {path} failed: {e:?}");
        }
    };
    if delay.is_zero() {
        go();
    } else {
        set_timeout(go, delay);
    }
}

/// Saves `url` through a temporary download link.
pub fn download(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let doc = window.document().ok_or("No document")?;
    let body = doc.body().ok_or("No body")?;

    let link: HtmlAnchorElement = doc
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "Not an anchor")?;
    link.set_href(url);
    link.set_download(filename);

    body.append_child(&link).map_err(|e| format!("{e:?}"))?;
    link.click();
    body.remove_child(&link).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

pub async fn play(audio: &HtmlAudioElement) -> Result<(), String> {
    if audio.src().is_empty() {
        return Ok(());
    }
    let promise = audio.play().map_err(|e| format!("{e:?}"))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}

/// Scrolls to `el` on the next frame, once pending visibility changes have
/// been rendered.
pub fn scroll_into_view(el: &HtmlElement) {
    let el = el.clone();
    request_animation_frame(move || el.scroll_into_view());
}

/// Grows a text area to fit its content, or resets it when `fit` is false.
pub fn fit_height(el: &HtmlElement, fit: bool) {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    if fit {
        let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
    }
}
