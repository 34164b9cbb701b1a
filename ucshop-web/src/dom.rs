use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Failure reaching a browser API.
///
/// Host builds only ever see [`DomError::NoWindow`]; no JavaScript value is
/// created off the browser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("window unavailable")]
    NoWindow,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// Always `None` off the browser, so server-side rendering never touches
/// JavaScript bindings.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .local_storage()?
        .ok_or(DomError::NoStorage)
}

/// Current query string, including the leading `?`, or empty.
#[must_use]
pub fn location_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Open `url` in a new browsing context without waiting for it.
///
/// Returns `Ok(false)` when the browser blocked the new window.
///
/// # Errors
/// Returns an error if no window is available or the call throws.
pub fn open_in_new_tab(url: &str) -> Result<bool, DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let opened = win.open_with_url_and_target(url, "_blank")?;
    Ok(opened.is_some())
}

/// Run `callback` once after `millis`.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be scheduled.
pub fn set_timeout(millis: i32, callback: impl FnOnce() + 'static) -> Result<(), DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let closure = Closure::once(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        millis,
    )?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_has_no_browser() {
        assert!(window().is_none());
        assert_eq!(local_storage().err(), Some(DomError::NoWindow));
        assert_eq!(open_in_new_tab("https://example.com"), Err(DomError::NoWindow));
        assert_eq!(set_timeout(10, || {}), Err(DomError::NoWindow));
    }
}
