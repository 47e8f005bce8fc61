use crate::app::App;

mod app;
mod carousel;
mod components;
mod config;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
