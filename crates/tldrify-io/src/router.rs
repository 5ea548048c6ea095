//! Hash-based navigation.

use tldrify_summary::Route;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, HashChangeEvent};

/// Errors from reading or changing the location hash.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

fn window() -> Result<web_sys::Window, NavigationError> {
    web_sys::window().ok_or_else(|| NavigationError::JsError("no global window".into()))
}

/// The raw `location.hash`.
///
/// # Errors
///
/// Returns [`NavigationError::JsError`] outside a browser window.
pub fn current_hash() -> Result<String, NavigationError> {
    Ok(window()?.location().hash()?)
}

/// The route addressed by the current hash.
///
/// # Errors
///
/// Returns [`NavigationError::JsError`] outside a browser window.
pub fn current_route() -> Result<Route, NavigationError> {
    current_hash().map(|hash| Route::parse_hash(&hash))
}

/// Navigate to `route`.
///
/// Setting the hash fires `hashchange`; when the hash is already
/// current, a `hashchange` event is dispatched manually so listeners
/// still reload the route.
///
/// # Errors
///
/// Returns [`NavigationError::JsError`] if the hash cannot be set.
pub fn navigate(route: &Route) -> Result<(), NavigationError> {
    let window = window()?;
    let location = window.location();
    let next = route.to_hash();
    if location.hash()? == next {
        let event = HashChangeEvent::new("hashchange")?;
        window.dispatch_event(&event)?;
    } else {
        location.set_hash(&next)?;
    }
    Ok(())
}

/// Wait for the next `hashchange` event.
///
/// The listener is registered with `once`, so nothing is left behind
/// after the event fires.
///
/// # Errors
///
/// Returns [`NavigationError::JsError`] if the listener cannot be added.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn next_hash_change() -> Result<(), NavigationError> {
    let window = window()?;
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let mut registered = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        registered = window.add_event_listener_with_callback_and_add_event_listener_options(
            "hashchange",
            &resolve,
            &options,
        );
    });
    registered?;
    JsFuture::from(promise).await?;
    Ok(())
}
