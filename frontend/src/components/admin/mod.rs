//! Admin dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `AdminPanel`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the full award collection from the store.
//! - Host the request helpers shared by the first-render fetch and the
//!   retry path: list, create, and delete against `/api/awards`.

use gloo_net::http::Request;
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
pub use state::AdminPanel;

use state::FailedAction;

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminPanel::new()
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

/// Fetches the full collection and replaces the local cache.
fn load_awards(link: Scope<AdminPanel>) {
    spawn_local(async move {
        match Request::get(&config::awards_url()).send().await {
            Ok(response) if response.ok() => match response.json::<Vec<Award>>().await {
                Ok(awards) => link.send_message(Msg::AwardsLoaded(awards)),
                Err(err) => {
                    link.send_message(Msg::RequestFailed(FailedAction::Load, err.to_string()))
                }
            },
            Ok(response) => link.send_message(Msg::RequestFailed(
                FailedAction::Load,
                format!("status {}", response.status()),
            )),
            Err(err) => link.send_message(Msg::RequestFailed(FailedAction::Load, err.to_string())),
        }
    });
}

/// Sends a record (without id) to the store. The form is cleared and the
/// collection re-fetched only once `CreateSucceeded` comes back.
fn create_award(link: Scope<AdminPanel>, award: Award) {
    spawn_local(async move {
        let request = match Request::post(&config::awards_url()).json(&award) {
            Ok(request) => request,
            Err(err) => {
                link.send_message(Msg::RequestFailed(FailedAction::Create, err.to_string()));
                return;
            }
        };
        match request.send().await {
            Ok(response) if response.ok() => link.send_message(Msg::CreateSucceeded),
            Ok(response) => link.send_message(Msg::RequestFailed(
                FailedAction::Create,
                format!("status {}", response.status()),
            )),
            Err(err) => {
                link.send_message(Msg::RequestFailed(FailedAction::Create, err.to_string()))
            }
        }
    });
}

/// Sends a removal request for one record by its store-assigned id.
fn delete_award(link: Scope<AdminPanel>, id: String) {
    spawn_local(async move {
        match Request::delete(&config::award_url(&id)).send().await {
            Ok(response) if response.ok() => link.send_message(Msg::DeleteSucceeded),
            Ok(response) => link.send_message(Msg::RequestFailed(
                FailedAction::Delete(id.clone()),
                format!("status {}", response.status()),
            )),
            Err(err) => link.send_message(Msg::RequestFailed(
                FailedAction::Delete(id.clone()),
                err.to_string(),
            )),
        }
    });
}
