use crate::components::daisy_ui::{Badge, Card, DaisyColor};
use crate::i18n::{fmt_rub, t, tr1};
use ucshop_core::Package;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PackageCardProps {
    pub package: Package,
    #[prop_or_default]
    pub selected: bool,
    pub on_buy: Callback<u32>,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let pkg = props.package;
    let on_click = {
        let cb = props.on_buy.clone();
        Callback::from(move |_| cb.emit(pkg.id))
    };
    let mut class = classes!("package-card");
    if pkg.popular {
        class.push("package-card--popular");
    }
    if props.selected {
        class.push("ring-2");
        class.push("ring-primary");
    }
    let actions = html! {
        <button
            type="button"
            class="btn btn-primary btn-block"
            data-package={pkg.id.to_string()}
            onclick={on_click}
        >
            { t("catalog.buy") }
        </button>
    };

    html! {
        <Card id={AttrValue::from(format!("package-{}", pkg.id))} class={class} actions={actions}>
            if pkg.popular {
                <Badge class="package-card__hit" variant={DaisyColor::Accent} label={t("catalog.popular")} />
            }
            <p class="package-card__amount"><span>{ pkg.amount.to_string() }</span>{" UC"}</p>
            if let Some(bonus) = pkg.bonus {
                <p class="package-card__bonus">{ tr1("catalog.bonus", "bonus", &bonus.to_string()) }</p>
            }
            <p class="package-card__price">{ fmt_rub(u64::from(pkg.price)) }</p>
            if props.selected {
                <span class="sr-only">{ t("catalog.selected") }</span>
            }
        </Card>
    }
}
