use crate::i18n::{t, use_lang};
use ucshop_core::PAYMENT_CATEGORIES;
use yew::prelude::*;

#[function_component(PaymentSection)]
pub fn payment_section() -> Html {
    let lang = use_lang();
    html! {
        <section id="payment" class="section" aria-labelledby="payment-title" lang={lang}>
            <h2 id="payment-title" class="section__title">{ t("payment.title") }</h2>
            <p class="section__subtitle">{ t("payment.subtitle") }</p>
            <ul class="payment-grid">
                { for PAYMENT_CATEGORIES.iter().map(|cat| html! {
                    <li class="payment-tile">
                        <span class="payment-tile__icon" aria-hidden="true">{ cat.icon }</span>
                        <p class="font-semibold">{ t(cat.label_key) }</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}
