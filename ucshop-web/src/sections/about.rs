use crate::i18n::{t, tr1, use_lang};
use ucshop_core::ABOUT_STATS;
use yew::prelude::*;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let lang = use_lang();
    html! {
        <section id="about" class="section section--alt" aria-labelledby="about-title" lang={lang}>
            <h2 id="about-title" class="section__title">{ t("about.title") }</h2>
            <p class="about__text">{ t("about.text") }</p>
            <div class="stats">
                { for ABOUT_STATS.iter().map(|stat| {
                    // Delivery time is a number of minutes; the unit is localized
                    let value = if stat.label_key == "about.stats.delivery" {
                        tr1("about.minutes", "value", stat.value)
                    } else {
                        stat.value.to_string()
                    };
                    html! {
                        <div class="stat">
                            <div class="stat-value">{ value }</div>
                            <div class="stat-desc">{ t(stat.label_key) }</div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
