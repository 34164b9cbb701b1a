use crate::components::focus::{keydown_handler, use_focus_management};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal dialog shell. Clicking the backdrop, the close button or pressing
/// Escape emits `on_close`; the parent decides whether it actually closes.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();
    use_focus_management(props.open, container_ref.clone());

    if !props.open {
        return Html::default();
    }

    let title_id = format!("{}-title", props.id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("{}-desc", props.id));

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = keydown_handler(container_ref.clone(), props.on_close.clone());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={props.id.clone()}
                class="modal-box"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                onkeydown={on_keydown}
                onclick={stop}
                ref={container_ref}
            >
                <div class="modal-box__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="btn btn-ghost btn-sm modal-box__close" aria-label={t("dialog.close")} onclick={on_close}>
                        {"✕"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| html! {
                    <p id={desc_id.clone()} class="modal-box__description">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="modal-box__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
