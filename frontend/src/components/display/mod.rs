//! Public display board: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering.
//!
//! The board fetches the award collection once, then cycles a seven-second
//! carousel over it. Fetch failures are logged and retried with capped
//! exponential backoff; a successfully fetched but empty collection leaves
//! the loading placeholder up and never starts the timer.

use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::award::Award;

use crate::config;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DisplayBoard;

/// First retry delay after a failed collection fetch.
const INITIAL_RETRY_MS: u32 = 1_000;
/// Backoff ceiling.
const MAX_RETRY_MS: u32 = 30_000;

impl Component for DisplayBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DisplayBoard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_awards(ctx.link().clone());
        }
    }
}

/// Fetches the collection, retrying with exponential backoff until a
/// response parses. A late response to an unmounted board goes to a dead
/// scope and is dropped with it.
fn load_awards(link: Scope<DisplayBoard>) {
    spawn_local(async move {
        let mut delay = INITIAL_RETRY_MS;
        loop {
            match fetch_collection().await {
                Ok(awards) => {
                    link.send_message(Msg::AwardsLoaded(awards));
                    return;
                }
                Err(detail) => {
                    error!("Error fetching awards:", detail);
                    TimeoutFuture::new(delay).await;
                    delay = (delay * 2).min(MAX_RETRY_MS);
                }
            }
        }
    });
}

async fn fetch_collection() -> Result<Vec<Award>, String> {
    let response = Request::get(&config::awards_url())
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    response
        .json::<Vec<Award>>()
        .await
        .map_err(|err| err.to_string())
}
