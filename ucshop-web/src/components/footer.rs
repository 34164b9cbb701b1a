use crate::i18n::{t, use_lang};
use crate::paths::asset_path;
use ucshop_core::SOCIAL_LINKS;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_lang();
    html! {
        <footer class="site-footer" lang={lang}>
            <div class="site-footer__brand">
                <img src={asset_path("static/img/logo.svg")} alt="" width="32" height="32" />
                <span class="font-bold">{ t("app.title") }</span>
            </div>
            <p class="text-sm">{ t("footer.rights") }</p>
            <nav class="site-footer__social" aria-label={t("footer.social")}>
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.title}>
                        <span aria-hidden="true">{ link.icon }</span>
                    </a>
                }) }
            </nav>
        </footer>
    }
}
