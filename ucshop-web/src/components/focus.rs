//! Dialog focus handling: move focus in on open, restore it on close, trap Tab.
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

fn active_html_element() -> Option<web_sys::HtmlElement> {
    crate::dom::document()
        .and_then(|doc| doc.active_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
}

fn focusable_within(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Focus the first control in `container_ref` while `open`, and hand focus
/// back to whatever had it before once the dialog closes.
#[hook]
pub fn use_focus_management(open: bool, container_ref: NodeRef) {
    use_effect_with((open, container_ref), move |(open, container_ref)| {
        let prev_focus = if *open { active_html_element() } else { None };
        if *open
            && let Some(first) = container_ref
                .cast::<web_sys::Element>()
                .and_then(|el| focusable_within(&el).into_iter().next())
        {
            let _ = first.focus();
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Escape closes; Tab and Shift+Tab wrap inside the container.
pub fn keydown_handler(container_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            e.prevent_default();
            on_close.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(container) = container_ref.cast::<web_sys::Element>() else {
            return;
        };
        let nodes = focusable_within(&container);
        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            return;
        };
        let Some(active) = crate::dom::document().and_then(|d| d.active_element()) else {
            return;
        };
        if !container.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
            return;
        }
        let first_el: &web_sys::Element = first.as_ref();
        let last_el: &web_sys::Element = last.as_ref();
        if e.shift_key() && active == *first_el {
            e.prevent_default();
            let _ = last.focus();
        } else if !e.shift_key() && active == *last_el {
            e.prevent_default();
            let _ = first.focus();
        }
    })
}
