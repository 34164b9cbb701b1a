use crate::i18n::{t, use_lang};
use ucshop_core::{CONTACTS, ContactKind};
use yew::prelude::*;

const fn icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Telegram => "✈️",
        ContactKind::WhatsApp => "💬",
        ContactKind::Email => "✉️",
    }
}

#[function_component(ContactsSection)]
pub fn contacts_section() -> Html {
    let lang = use_lang();
    html! {
        <section id="contacts" class="section section--alt" aria-labelledby="contacts-title" lang={lang}>
            <h2 id="contacts-title" class="section__title">{ t("contacts.title") }</h2>
            <p class="section__subtitle">{ t("contacts.subtitle") }</p>
            <div class="contacts-grid">
                { for CONTACTS.iter().map(|contact| html! {
                    <a class="contact-tile" href={contact.href} target="_blank" rel="noopener noreferrer">
                        <span aria-hidden="true">{ icon(contact.kind) }</span>
                        <p class="font-semibold">{ contact.title }</p>
                        <p class="text-sm">{ contact.handle }</p>
                    </a>
                }) }
            </div>
        </section>
    }
}
