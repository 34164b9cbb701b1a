use crate::components::daisy_ui::DaisyColor;
use crate::storage::BrowserStorage;
use std::cell::RefCell;
use std::rc::Rc;
use ucshop_core::{Checkout, Notice};
use yew::prelude::*;

/// How long a toast stays up unless dismissed.
pub const TOAST_DISMISS_MS: i32 = 4_000;

/// The single toast currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub text: String,
    pub variant: DaisyColor,
}

#[derive(Clone)]
pub struct AppState {
    pub checkout: UseStateHandle<Checkout<BrowserStorage>>,
    pub form_error: UseStateHandle<Option<Notice>>,
    pub toast: UseStateHandle<Option<ToastMessage>>,
    /// Id of the most recent toast; a timer only clears the toast it created.
    pub toast_seq: Rc<RefCell<u64>>,
    pub faq_open: UseStateHandle<Option<&'static str>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        checkout: use_state(|| Checkout::load(BrowserStorage)),
        form_error: use_state(|| None::<Notice>),
        toast: use_state(|| None::<ToastMessage>),
        toast_seq: use_mut_ref(|| 0_u64),
        faq_open: use_state(|| None::<&'static str>),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Replace the visible toast and schedule its dismissal.
    pub fn show_toast(&self, text: String, variant: DaisyColor) {
        let id = {
            let mut seq = self.toast_seq.borrow_mut();
            *seq += 1;
            *seq
        };
        crate::a11y::set_status(&text);
        self.toast.set(Some(ToastMessage { id, text, variant }));

        let toast = self.toast.clone();
        let seq = Rc::clone(&self.toast_seq);
        let scheduled = crate::dom::set_timeout(TOAST_DISMISS_MS, move || {
            if *seq.borrow() == id {
                toast.set(None);
            }
        });
        if let Err(err) = scheduled {
            log::debug!("toast {id} will not auto-dismiss: {err}");
        }
    }
}
