use crate::components::ui::PackageCard;
use crate::i18n::t;
use ucshop_core::packages;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogProps {
    pub selected: Option<u32>,
    pub on_buy: Callback<u32>,
}

#[function_component(CatalogSection)]
pub fn catalog_section(props: &CatalogProps) -> Html {
    html! {
        <section id="catalog" class="section" aria-labelledby="catalog-title">
            <h2 id="catalog-title" class="section__title">{ t("catalog.title") }</h2>
            <p class="section__subtitle">{ t("catalog.subtitle") }</p>
            <div class="catalog-grid">
                { for packages().iter().map(|pkg| html! {
                    <PackageCard
                        key={pkg.id}
                        package={*pkg}
                        selected={props.selected == Some(pkg.id)}
                        on_buy={props.on_buy.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
