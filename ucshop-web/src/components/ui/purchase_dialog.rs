use crate::components::modal::Modal;
use crate::i18n::{fmt_rub, t, tr};
use std::collections::BTreeMap;
use ucshop_core::{Package, PaymentMethod};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PurchaseDialogProps {
    pub open: bool,
    pub package: Option<Package>,
    pub player_id: AttrValue,
    pub method: PaymentMethod,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_player_id: Callback<String>,
    pub on_method: Callback<PaymentMethod>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(PurchaseDialog)]
pub fn purchase_dialog(props: &PurchaseDialogProps) -> Html {
    let on_input = {
        let cb = props.on_player_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let summary = props.package.map(|pkg| {
        let amount = pkg.amount.to_string();
        let price = fmt_rub(u64::from(pkg.price));
        let mut args = BTreeMap::new();
        args.insert("amount", amount.as_str());
        args.insert("price", price.as_str());
        tr("purchase.summary", Some(&args))
    });
    let submit_label = {
        let price = props
            .package
            .map(|pkg| fmt_rub(u64::from(pkg.price)))
            .unwrap_or_default();
        let mut args = BTreeMap::new();
        args.insert("price", price.as_str());
        tr("purchase.submit", Some(&args))
    };
    let error_id = "purchase-player-id-error";

    html! {
        <Modal
            id="purchase-dialog"
            open={props.open}
            title={t("purchase.title")}
            description={summary.map(AttrValue::from)}
            on_close={props.on_close.clone()}
        >
            <form class="purchase-form" novalidate=true onsubmit={on_submit}>
                <div class="form-control">
                    <label for="player-id" class="label">{ t("purchase.player_id") }</label>
                    <input
                        id="player-id"
                        type="text"
                        class={classes!("input", "input-bordered", props.error.is_some().then_some("input-error"))}
                        placeholder={t("purchase.player_id_placeholder")}
                        value={props.player_id.clone()}
                        oninput={on_input}
                        aria-invalid={props.error.is_some().to_string()}
                        aria-describedby={props.error.is_some().then_some(error_id)}
                        autocomplete="off"
                    />
                    <p class="label-text-alt">{ t("purchase.player_id_hint") }</p>
                    if let Some(error) = props.error.clone() {
                        <p id={error_id} class="text-error" role="alert">{ error }</p>
                    }
                </div>
                <fieldset class="form-control">
                    <legend class="label">{ t("purchase.method") }</legend>
                    { for PaymentMethod::ALL.into_iter().map(|method| {
                        let on_change = {
                            let cb = props.on_method.clone();
                            Callback::from(move |_: Event| cb.emit(method))
                        };
                        let id = format!("method-{}", method.key());
                        html! {
                            <label for={id.clone()} class="label cursor-pointer justify-start gap-2">
                                <input
                                    id={id}
                                    type="radio"
                                    name="payment-method"
                                    class="radio radio-primary"
                                    value={method.key()}
                                    checked={props.method == method}
                                    onchange={on_change}
                                />
                                <span>{ method.label() }</span>
                            </label>
                        }
                    }) }
                    if props.method.is_redirect() {
                        <p class="text-sm text-info">{ t("purchase.redirect_hint") }</p>
                    }
                </fieldset>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>{ t("purchase.cancel") }</button>
                    <button id="purchase-submit" type="submit" class="btn btn-primary">{ submit_label }</button>
                </div>
            </form>
        </Modal>
    }
}
