//! View rendering for the display board.
//!
//! Before the collection arrives the board shows a centered loading
//! placeholder with no footer. Once rotating, each frame renders three
//! de-emphasized cards on either side of the center card (opacity and
//! scale fall off with distance from the center, purely presentational)
//! and a position footer. Blank fields render as an em-dash placeholder;
//! `additionalInfo` gets a section only when non-empty.

use yew::prelude::*;

use common::model::award::Award;

use crate::carousel::SIDE_CARDS;

use super::state::DisplayBoard;

const SMALL_CARD_STYLE: &str = "width:13%;min-width:160px;background:rgba(255,255,255,0.9);backdrop-filter:blur(3px);border-radius:15px;padding:12px;box-shadow:0 3px 10px rgba(0,0,0,0.25);text-align:center;color:#111;";

pub fn view(component: &DisplayBoard, _ctx: &Context<DisplayBoard>) -> Html {
    let Some(rotation) = &component.rotation else {
        return loading_placeholder();
    };
    let window = rotation.window();
    let current = &component.awards[window.center];

    html! {
        <div style="height:100vh;width:100vw;overflow:hidden;background:linear-gradient(rgba(0,0,0,0.55), rgba(0,0,0,0.55)), #3a3a3a;display:flex;flex-direction:column;justify-content:center;align-items:center;font-family:'Open Sans', sans-serif;position:relative;">
            <div style="display:flex;align-items:center;justify-content:space-between;width:90%;max-width:1600px;">
                { side_column(&component.awards, &window.left, true) }
                { center_card(current) }
                { side_column(&component.awards, &window.right, false) }
            </div>
            <div style="position:absolute;bottom:25px;width:100%;text-align:center;font-size:1rem;color:#eee;font-weight:500;">
                { format!("Showing {} of {} awards", rotation.index() + 1, rotation.len()) }
            </div>
        </div>
    }
}

fn loading_placeholder() -> Html {
    html! {
        <div style="height:100vh;display:flex;justify-content:center;align-items:center;flex-direction:column;font-family:'Open Sans', sans-serif;">
            <h1>{ "Award Showcase" }</h1>
            <p>{ "Loading awards..." }</p>
        </div>
    }
}

/// One column of neighbor cards. The left column lists slots farthest to
/// nearest, the right column nearest to farthest; `farthest_first` maps
/// each position back to its distance from the center for the falloff.
fn side_column(awards: &[Award], slots: &[usize; SIDE_CARDS], farthest_first: bool) -> Html {
    html! {
        <div style="display:flex;flex-direction:column;gap:18px;align-items:center;justify-content:center;flex:0 0 15%;">
            {
                for slots.iter().enumerate().map(|(position, &slot)| {
                    let distance = if farthest_first {
                        SIDE_CARDS - position
                    } else {
                        position + 1
                    };
                    small_card(&awards[slot], distance)
                })
            }
        </div>
    }
}

fn small_card(award: &Award, distance: usize) -> Html {
    let falloff = (distance - 1) as f64;
    let style = format!(
        "{SMALL_CARD_STYLE}opacity:{:.2};transform:scale({:.2});",
        0.9 - 0.15 * falloff,
        1.0 - 0.05 * falloff,
    );
    html! {
        <div style={style}>
            <h4 style="color:#8c1515;font-size:1rem;margin-bottom:4px;">{ award.award_name.clone() }</h4>
            <p style="margin:0;font-size:0.8rem;">{ award.year.clone() }</p>
            <p style="margin:0;font-size:0.8rem;">{ award.rank.clone() }</p>
        </div>
    }
}

fn center_card(award: &Award) -> Html {
    let title = if award.award_name.is_empty() {
        "Unnamed Award".to_string()
    } else {
        award.award_name.clone()
    };

    html! {
        <div style="width:45%;max-width:850px;background-color:rgba(255,255,255,0.96);border-radius:25px;box-shadow:0 10px 40px rgba(0,0,0,0.4);padding:50px 60px;text-align:left;z-index:5;">
            <h1 style="color:#8c1515;margin-bottom:25px;font-size:2rem;">{ title }</h1>
            { detail_row("Competition", &award.competition) }
            { detail_row("Category", &award.category) }
            { detail_row("Year", &award.year) }
            { detail_row("School", &award.school) }
            { detail_row("Rank", &award.rank) }
            { detail_row("Participants", &award.participants) }
            {
                if award.additional_info.is_empty() {
                    html! {}
                } else {
                    html! {
                        <p style="font-style:italic;margin-top:20px;">{ award.additional_info.clone() }</p>
                    }
                }
            }
        </div>
    }
}

/// A labelled field row; blank values render as an em-dash placeholder.
fn detail_row(label: &str, value: &str) -> Html {
    let shown = if value.is_empty() { "—" } else { value };
    html! {
        <p><strong>{ format!("{}: ", label) }</strong>{ shown.to_string() }</p>
    }
}
