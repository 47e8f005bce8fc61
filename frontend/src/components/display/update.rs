//! Update function for the display board.
//!
//! The rotation timer starts only once the collection is non-empty, and is
//! rebound whenever the collection reference changes: the old interval is
//! dropped before the new one is created so a tick can never index into
//! replaced data.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{Rotation, ROTATION_PERIOD_MS};

use super::messages::Msg;
use super::state::DisplayBoard;

pub fn update(component: &mut DisplayBoard, ctx: &Context<DisplayBoard>, msg: Msg) -> bool {
    match msg {
        Msg::AwardsLoaded(awards) => {
            component.awards = awards;

            // The old interval belongs to the replaced list.
            component.interval = None;
            component.rotation = match component.rotation.take() {
                Some(rotation) => rotation.resync(component.awards.len()),
                None => Rotation::new(component.awards.len()),
            };

            if component.rotation.is_some() {
                let link = ctx.link().clone();
                component.interval = Some(Interval::new(ROTATION_PERIOD_MS, move || {
                    link.send_message(Msg::Tick);
                }));
            }
            true
        }
        Msg::Tick => {
            if let Some(rotation) = &mut component.rotation {
                rotation.advance();
                true
            } else {
                false
            }
        }
    }
}
