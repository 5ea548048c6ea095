//! Cloudflare Turnstile bot verification.
//!
//! Calls the global `turnstile` object injected by Cloudflare's
//! `<script>` tag. The widget is rendered explicitly into a container
//! once the script has loaded; every function here quietly returns
//! nothing when the script is absent (blocked, or still loading).

use dioxus::logger::tracing;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

/// Script that defines `window.turnstile`.
pub const SCRIPT_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/api.js?render=explicit";

/// How often to look for the script while waiting for it to load.
const POLL_INTERVAL_MS: u32 = 100;

/// How many times to look before giving up (about ten seconds).
const POLL_ATTEMPTS: u32 = 100;

/// The `turnstile` global, if the script has loaded.
fn turnstile() -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("turnstile")).ok()?;
    value.is_object().then_some(value)
}

/// Call `turnstile.<method>(args...)`.
fn call(method: &str, args: &[JsValue]) -> Option<JsValue> {
    let turnstile = turnstile()?;
    let func = js_sys::Reflect::get(&turnstile, &JsValue::from_str(method)).ok()?;
    if !func.is_function() {
        return None;
    }
    let func: js_sys::Function = func.unchecked_into();
    let args: js_sys::Array = args.iter().collect();
    func.apply(&turnstile, &args)
        .inspect_err(|e| tracing::warn!(method, error = ?e, "turnstile call failed"))
        .ok()
}

/// Render the widget into the element matching `container` (a CSS
/// selector such as `"#turnstile"`), waiting for the script to load.
///
/// Returns the widget id, or `None` if the script never loaded.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn render_when_ready(container: &str, site_key: &str) -> Option<String> {
    for _ in 0..POLL_ATTEMPTS {
        if turnstile().is_some() {
            return render(container, site_key);
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
    tracing::warn!("turnstile script did not load");
    None
}

fn render(container: &str, site_key: &str) -> Option<String> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"sitekey".into(), &site_key.into()).ok()?;
    js_sys::Reflect::set(&options, &"theme".into(), &"light".into()).ok()?;
    let id = call("render", &[container.into(), options.into()])?.as_string();
    tracing::debug!(?id, "turnstile rendered");
    id
}

/// The current verification token of widget `widget_id`, if solved.
#[must_use]
pub fn response(widget_id: &str) -> Option<String> {
    call("getResponse", &[widget_id.into()])?
        .as_string()
        .filter(|token| !token.is_empty())
}

/// Remove widget `widget_id` from the page.
pub fn remove(widget_id: &str) {
    let _ = call("remove", &[widget_id.into()]);
}
