use super::shared::{BridgeSnapshot, snapshot_of};
use crate::app::state::AppState;
use crate::dom;
use crate::storage::BrowserStorage;
use std::cell::RefCell;
use std::rc::Rc;
use ucshop_core::Checkout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const BRIDGE_GLOBAL: &str = "__ucshopTest";

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _reset: Closure<dyn FnMut()>,
}

fn test_mode_enabled() -> bool {
    dom::location_search().contains("test=1")
}

fn build_bridge(state: &AppState, snapshot: Rc<RefCell<BridgeSnapshot>>) -> BridgeBindings {
    let state_fn = Closure::wrap(Box::new(move || {
        serde_wasm_bindgen::to_value(&*snapshot.borrow()).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let reset_state = state.clone();
    let reset = Closure::wrap(Box::new(move || {
        let mut fresh = Checkout::load(BrowserStorage);
        if let Err(err) = fresh.reset() {
            log::error!("test bridge reset could not clear history: {err}");
        }
        reset_state.checkout.set(fresh);
        reset_state.form_error.set(None);
        reset_state.toast.set(None);
        reset_state.faq_open.set(None);
        log::info!("test bridge reset");
    }) as Box<dyn FnMut()>);

    BridgeBindings {
        _state: state_fn,
        _reset: reset,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        bindings._state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("reset"),
        bindings._reset.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_GLOBAL), &bridge);
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let snapshot = use_mut_ref(BridgeSnapshot::default);

    // Handles captured by the closures go stale; the snapshot is refreshed
    // on every render instead.
    *snapshot.borrow_mut() = snapshot_of(
        &*app_state.checkout,
        (*app_state.form_error).as_ref(),
        (*app_state.toast).as_ref().map(|t| t.text.as_str()),
    );

    let state = app_state.clone();
    use_effect_with((), move |()| {
        if test_mode_enabled() && bridge_handle.borrow().is_none() {
            let bindings = build_bridge(&state, snapshot);
            attach_bridge(&bindings);
            log::debug!("test bridge attached as window.{BRIDGE_GLOBAL}");
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
