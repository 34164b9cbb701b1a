use crate::components::daisy_ui::Accordion;
use crate::i18n::t;
use ucshop_core::FAQ;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FaqProps {
    /// Id of the expanded item; at most one is open.
    pub open: Option<&'static str>,
    pub on_toggle: Callback<Option<&'static str>>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    html! {
        <section id="help" class="section" aria-labelledby="help-title">
            <h2 id="help-title" class="section__title">{ t("faq.title") }</h2>
            <div class="faq">
                { for FAQ.iter().map(|entry| {
                    let id = entry.id;
                    let on_toggle = {
                        let cb = props.on_toggle.clone();
                        Callback::from(move |open: bool| cb.emit(open.then_some(id)))
                    };
                    html! {
                        <Accordion
                            key={id}
                            id={AttrValue::from(format!("faq-{id}"))}
                            title={t(&format!("faq.{id}.q"))}
                            open={props.open == Some(id)}
                            on_toggle={on_toggle}
                        >
                            <p>{ t(&format!("faq.{id}.a")) }</p>
                        </Accordion>
                    }
                }) }
            </div>
        </section>
    }
}
