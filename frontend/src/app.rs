use yew::{html, Component, Context, Html};

use crate::components::admin::AdminPanel;
use crate::components::display::DisplayBoard;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if is_admin_path() {
            html! { <AdminPanel /> }
        } else {
            html! { <DisplayBoard /> }
        }
    }
}

/// The admin dashboard is reached by any path containing `admin`; every
/// other path mounts the public display. Switching requires a full
/// navigation, there is no in-app transition between the two.
fn is_admin_path() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .is_some_and(|path| path.contains("admin"))
}
