use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod test_bridge;
pub mod view;

pub use handlers::{AppHandlers, notice_text};
pub use state::{AppState, ToastMessage};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    test_bridge::use_test_bridge(&app_state);
    view::render_app(&app_state)
}
