use crate::components::daisy_ui::foundation as f;

/// Read-only star row.
#[derive(f::Properties, PartialEq, Clone)]
pub struct RatingProps {
    #[prop_or(5)]
    pub max: u8,
    pub value: u8,
    pub label: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Rating)]
pub fn rating(props: &RatingProps) -> f::Html {
    let max = props.max.max(1);
    let value = props.value.min(max);
    let class = f::class_list(&["rating", "rating-sm"], &props.class);
    f::html! {
        <div class={class} role="img" aria-label={props.label.clone()} data-rating={value.to_string()}>
            { for (1..=max).map(|idx| {
                let filled = if idx <= value { "star star--filled" } else { "star" };
                f::html! { <span class={filled} aria-hidden="true">{"★"}</span> }
            }) }
        </div>
    }
}
