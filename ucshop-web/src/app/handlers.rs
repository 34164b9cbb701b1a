use crate::app::state::AppState;
use crate::components::daisy_ui::DaisyColor;
use crate::dom;
use crate::i18n::{t, tr1};
use ucshop_core::{ExternalAction, Notice, PaymentMethod, SubmitOutcome, find_package};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub select_package: Callback<u32>,
    pub player_id_change: Callback<String>,
    pub method_change: Callback<PaymentMethod>,
    pub submit: Callback<()>,
    pub close_purchase: Callback<()>,
    pub open_history: Callback<()>,
    pub close_history: Callback<()>,
    pub lang_change: Callback<String>,
    pub faq_toggle: Callback<Option<&'static str>>,
    pub dismiss_toast: Callback<AttrValue>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            select_package: build_select_package(state),
            player_id_change: build_player_id_change(state),
            method_change: build_method_change(state),
            submit: build_submit(state),
            close_purchase: build_close_purchase(state),
            open_history: build_open_history(state),
            close_history: build_close_history(state),
            lang_change: build_lang_change(state),
            faq_toggle: build_faq_toggle(state),
            dismiss_toast: build_dismiss_toast(state),
        }
    }
}

/// Text shown for a checkout notice in the active locale.
#[must_use]
pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::InvalidPlayerId { min_len } => {
            tr1("notice.invalid_player_id", "min", &min_len.to_string())
        }
        Notice::NoPackageSelected => t("notice.no_package"),
        Notice::PurchaseCompleted { amount } => {
            tr1("notice.completed", "amount", &amount.to_string())
        }
        Notice::AwaitingPayment { amount } => tr1("notice.awaiting", "amount", &amount.to_string()),
    }
}

fn build_select_package(state: &AppState) -> Callback<u32> {
    let checkout = state.checkout.clone();
    let form_error = state.form_error.clone();
    Callback::from(move |id: u32| {
        let Some(package) = find_package(id) else {
            log::warn!("buy clicked for unknown package {id}");
            return;
        };
        let mut next = (*checkout).clone();
        next.select_package(package);
        log::debug!("package {id} selected");
        checkout.set(next);
        form_error.set(None);
    })
}

fn build_player_id_change(state: &AppState) -> Callback<String> {
    let checkout = state.checkout.clone();
    let form_error = state.form_error.clone();
    Callback::from(move |value: String| {
        let mut next = (*checkout).clone();
        next.set_player_id(value);
        checkout.set(next);
        if form_error.is_some() {
            form_error.set(None);
        }
    })
}

fn build_method_change(state: &AppState) -> Callback<PaymentMethod> {
    let checkout = state.checkout.clone();
    Callback::from(move |method: PaymentMethod| {
        let mut next = (*checkout).clone();
        next.set_payment_method(method);
        checkout.set(next);
    })
}

fn build_submit(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        let mut next = (*app.checkout).clone();
        match next.submit() {
            Ok(outcome) => {
                app.checkout.set(next);
                app.form_error.set(None);
                announce_outcome(&app, &outcome);
            }
            Err(err) => {
                log::debug!("purchase rejected: {err}");
                let notice = err.notice();
                app.show_toast(notice_text(&notice), DaisyColor::Error);
                app.form_error.set(Some(notice));
            }
        }
    })
}

fn announce_outcome(app: &AppState, outcome: &SubmitOutcome) {
    let mut text = notice_text(&outcome.notice);
    let mut variant = if outcome.external.is_some() {
        DaisyColor::Info
    } else {
        DaisyColor::Success
    };

    if let Some(ExternalAction::OpenPaymentPage { url, record_id }) = &outcome.external {
        match dom::open_in_new_tab(url) {
            Ok(true) => log::info!("opened payment page for {record_id}"),
            Ok(false) => {
                log::warn!("payment page for {record_id} was blocked");
                text = t("notice.redirect_blocked");
                variant = DaisyColor::Warning;
            }
            Err(err) => {
                log::error!("could not open payment page for {record_id}: {err}");
                text = t("notice.redirect_blocked");
                variant = DaisyColor::Warning;
            }
        }
    }

    if !outcome.persisted {
        text = format!("{text}. {}", t("notice.not_saved"));
        variant = DaisyColor::Warning;
    }
    app.show_toast(text, variant);
}

fn build_close_purchase(state: &AppState) -> Callback<()> {
    let checkout = state.checkout.clone();
    let form_error = state.form_error.clone();
    Callback::from(move |()| {
        let mut next = (*checkout).clone();
        next.close_purchase();
        checkout.set(next);
        form_error.set(None);
    })
}

fn build_open_history(state: &AppState) -> Callback<()> {
    let checkout = state.checkout.clone();
    Callback::from(move |()| {
        let mut next = (*checkout).clone();
        next.open_history();
        checkout.set(next);
    })
}

fn build_close_history(state: &AppState) -> Callback<()> {
    let checkout = state.checkout.clone();
    Callback::from(move |()| {
        let mut next = (*checkout).clone();
        next.close_history();
        checkout.set(next);
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |lang: String| {
        crate::i18n::set_lang(&lang);
        current_language.set(crate::i18n::current_lang());
    })
}

fn build_faq_toggle(state: &AppState) -> Callback<Option<&'static str>> {
    let faq_open = state.faq_open.clone();
    Callback::from(move |open: Option<&'static str>| faq_open.set(open))
}

fn build_dismiss_toast(state: &AppState) -> Callback<AttrValue> {
    let toast = state.toast.clone();
    Callback::from(move |_id: AttrValue| toast.set(None))
}

#[cfg(test)]
mod tests {
    use super::notice_text;
    use ucshop_core::Notice;

    #[test]
    fn notices_interpolate_values() {
        let text = notice_text(&Notice::InvalidPlayerId { min_len: 6 });
        assert!(text.contains('6'), "{text}");
        let text = notice_text(&Notice::PurchaseCompleted { amount: 325 });
        assert!(text.contains("325"), "{text}");
        let text = notice_text(&Notice::AwaitingPayment { amount: 60 });
        assert!(text.contains("60"), "{text}");
        assert!(!notice_text(&Notice::NoPackageSelected).is_empty());
    }
}
