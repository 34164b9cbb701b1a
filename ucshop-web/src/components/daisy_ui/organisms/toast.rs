use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Debug)]
pub struct ToastItem {
    pub id: f::AttrValue,
    pub text: f::AttrValue,
    pub variant: f::DaisyColor,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub class: f::Classes,
    pub dismiss_label: f::AttrValue,
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<f::AttrValue>>,
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    let class = f::class_list(&["toast", "toast-end", "toast-bottom"], &props.class);
    f::html! {
        <div class={class} role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id.clone();
                    let cb = cb.clone();
                    let on_click = f::Callback::from(move |_| cb.emit(id.clone()));
                    f::html! {
                        <button type="button" class="btn btn-ghost btn-xs" aria-label={props.dismiss_label.clone()} onclick={on_click}>{"✕"}</button>
                    }
                }).unwrap_or_default();
                let mut alert = f::Classes::from("alert");
                alert.push(toast.variant.class("alert"));
                f::html! {
                    <div key={toast.id.to_string()} class={alert} data-toast-id={toast.id.clone()}>
                        <span>{ toast.text.clone() }</span>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}
