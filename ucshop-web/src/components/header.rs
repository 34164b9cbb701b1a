use crate::i18n::{locales, t};
use crate::paths::asset_path;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#catalog", "nav.catalog"),
    ("#about", "nav.about"),
    ("#reviews", "nav.reviews"),
    ("#help", "nav.help"),
    ("#contacts", "nav.contacts"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub purchase_count: usize,
    pub on_lang_change: Callback<String>,
    pub on_open_history: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let open_history = {
        let cb = p.on_open_history.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner" class="site-header">
            <a href="#catalog" class="sr-only">{ t("app.skip") }</a>
            <div class="site-header__inner">
                <a href="#" class="site-header__logo">
                    <img src={asset_path("static/img/logo.svg")} alt="" width="32" height="32" />
                    <span>{ t("app.title") }</span>
                </a>
                <nav class="site-header__nav" aria-label={t("nav.catalog")}>
                    { for NAV_LINKS.iter().map(|(href, key)| html! {
                        <a href={*href}>{ t(key) }</a>
                    }) }
                </nav>
                <div class="site-header__actions">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" class="select select-sm" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>{ meta.name }</option>
                        }) }
                    </select>
                    <button id="history-open-btn" type="button" class="btn btn-primary btn-sm" onclick={open_history}>
                        { t("nav.history") }
                        if p.purchase_count > 0 {
                            <span class="badge badge-secondary ml-1" data-testid="history-count">{ p.purchase_count.to_string() }</span>
                        }
                    </button>
                </div>
            </div>
        </header>
    }
}
