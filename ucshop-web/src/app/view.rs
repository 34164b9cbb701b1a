use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::app::handlers::{AppHandlers, notice_text};
use crate::app::state::AppState;
use crate::components::daisy_ui::{Toast, ToastItem};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::{HistoryDialog, PurchaseDialog};
use crate::i18n::t;
use crate::sections::{
    AboutSection, CatalogSection, ContactsSection, FaqSection, Hero, PaymentSection,
    ReviewsSection,
};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let checkout = &*state.checkout;
    let view = checkout.state();
    let history = checkout.history();

    let toasts: Vec<ToastItem> = (*state.toast)
        .iter()
        .map(|toast| ToastItem {
            id: AttrValue::from(toast.id.to_string()),
            text: AttrValue::from(toast.text.clone()),
            variant: toast.variant,
        })
        .collect();
    let form_error = (*state.form_error).as_ref().map(|n| AttrValue::from(notice_text(n)));
    let lang = AttrValue::from((*state.current_language).clone());

    html! {
        <ContextProvider<AttrValue> context={lang.clone()}>
            <style>{ visible_focus_css() }</style>
            <Header
                current_lang={lang}
                purchase_count={history.len()}
                on_lang_change={handlers.lang_change.clone()}
                on_open_history={handlers.open_history.clone()}
            />
            <main id="main" role="main">
                <Hero />
                <CatalogSection selected={view.selected_package} on_buy={handlers.select_package.clone()} />
                <AboutSection />
                <PaymentSection />
                <ReviewsSection />
                <FaqSection open={*state.faq_open} on_toggle={handlers.faq_toggle.clone()} />
                <ContactsSection />
            </main>
            <Footer />
            <PurchaseDialog
                open={view.purchase_open}
                package={view.selected().copied()}
                player_id={AttrValue::from(view.player_id.clone())}
                method={view.payment_method}
                error={form_error}
                on_player_id={handlers.player_id_change.clone()}
                on_method={handlers.method_change.clone()}
                on_submit={handlers.submit.clone()}
                on_close={handlers.close_purchase.clone()}
            />
            <HistoryDialog
                open={view.history_open}
                records={history.all().to_vec()}
                total={history.total()}
                on_close={handlers.close_history.clone()}
            />
            <Toast toasts={toasts} dismiss_label={t("notice.dismiss")} on_dismiss={handlers.dismiss_toast.clone()} />
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
        </ContextProvider<AttrValue>>
    }
}
