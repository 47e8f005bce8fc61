//! Update function for the admin dashboard.
//!
//! Mutations follow a refresh-after-mutation contract: a successful create
//! or delete never patches the local cache, it triggers a full re-fetch of
//! the collection. Failures keep whatever the user typed and surface a
//! banner with Retry and Dismiss actions.

use yew::prelude::*;

use crate::toast::show_toast;

use super::messages::Msg;
use super::state::{AdminPanel, FailedAction, FailedRequest};
use super::{create_award, delete_award, load_awards};

/// Central update function for the component.
///
/// Mutates `component` based on `msg`, may spawn requests that report back
/// through further messages, and returns whether the view must re-render.
pub fn update(component: &mut AdminPanel, ctx: &Context<AdminPanel>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            component.form.set_value(field, value);
            true
        }
        Msg::Submit => {
            create_award(ctx.link().clone(), component.form.to_record());
            false
        }
        Msg::Delete(id) => {
            delete_award(ctx.link().clone(), id);
            false
        }
        Msg::AwardsLoaded(awards) => {
            component.awards = awards;
            true
        }
        Msg::CreateSucceeded => {
            component.form.clear();
            component.error = None;
            show_toast("Award saved.");
            load_awards(ctx.link().clone());
            true
        }
        Msg::DeleteSucceeded => {
            component.error = None;
            show_toast("Award deleted.");
            load_awards(ctx.link().clone());
            true
        }
        Msg::RequestFailed(action, detail) => {
            component.error = Some(FailedRequest { action, detail });
            true
        }
        Msg::Retry => {
            match component.error.take() {
                Some(FailedRequest {
                    action: FailedAction::Load,
                    ..
                }) => load_awards(ctx.link().clone()),
                Some(FailedRequest {
                    action: FailedAction::Create,
                    ..
                }) => create_award(ctx.link().clone(), component.form.to_record()),
                Some(FailedRequest {
                    action: FailedAction::Delete(id),
                    ..
                }) => delete_award(ctx.link().clone(), id),
                None => {}
            }
            true
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}
