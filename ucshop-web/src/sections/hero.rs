use crate::i18n::{t, use_lang};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let lang = use_lang();
    html! {
        <section id="hero" class="hero" lang={lang}>
            <div class="hero-content text-center">
                <span class="badge badge-secondary">{ t("hero.badge") }</span>
                <h1 class="hero__title">{ t("hero.title") }</h1>
                <p class="hero__subtitle">{ t("hero.subtitle") }</p>
                <div class="hero__actions">
                    <a href="#catalog" class="btn btn-primary btn-lg">{ t("hero.buy") }</a>
                    <a href="#catalog" class="btn btn-outline btn-lg">{ t("hero.promos") }</a>
                </div>
            </div>
        </section>
    }
}
