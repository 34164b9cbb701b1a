use crate::components::daisy_ui::foundation as f;

/// Controlled collapsible item; the parent owns which item is open.
#[derive(f::Properties, PartialEq, Clone)]
pub struct AccordionProps {
    pub id: f::AttrValue,
    pub title: f::AttrValue,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> f::Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let next = !props.open;
        f::Callback::from(move |_| on_toggle.emit(next))
    };
    let mut class = f::class_list(&["collapse", "collapse-arrow"], &props.class);
    if props.open {
        class.push("collapse-open");
    }
    let panel_id = format!("{}-panel", props.id);

    f::html! {
        <div class={class} data-open={props.open.to_string()}>
            <button
                id={props.id.clone()}
                type="button"
                class="collapse-title"
                aria-expanded={props.open.to_string()}
                aria-controls={panel_id.clone()}
                onclick={toggle}
            >
                { props.title.clone() }
            </button>
            if props.open {
                <div id={panel_id} class="collapse-content" role="region" aria-labelledby={props.id.clone()}>
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
