//! View rendering for the admin dashboard.
//!
//! A two-column input grid over all award fields, an error banner for
//! failed requests, and a table of the existing records with per-row
//! delete buttons. The store performs all validation; the form submits
//! whatever was typed, empty fields included.

use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::award::Award;

use super::messages::Msg;
use super::state::{AdminPanel, Field};

pub fn view(component: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();

    html! {
        <div style="padding: 40px; font-family: sans-serif;">
            <h1>{ "Award Showcase Admin Dashboard" }</h1>
            { build_error_banner(component, link) }
            { build_form(component, link) }
            <h2>{ "Existing Awards" }</h2>
            { build_table(component, link) }
        </div>
    }
}

/// Renders the banner for the last failed request, or nothing. Retry
/// re-dispatches the failed action; Dismiss just clears the banner.
fn build_error_banner(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    let Some(error) = &component.error else {
        return html! {};
    };
    html! {
        <div style="background:#fdecea;border:1px solid #d32f2f;color:#8c1515;padding:12px 16px;border-radius:8px;margin-bottom:20px;display:flex;align-items:center;gap:12px;">
            <span style="flex:1;">{ error.describe() }</span>
            <button
                onclick={link.callback(|_| Msg::Retry)}
                style="padding:6px 14px;border:none;border-radius:5px;background:#8c1515;color:white;cursor:pointer;"
            >
                { "Retry" }
            </button>
            <button
                onclick={link.callback(|_| Msg::DismissError)}
                style="padding:6px 14px;border:1px solid #8c1515;border-radius:5px;background:transparent;color:#8c1515;cursor:pointer;"
            >
                { "Dismiss" }
            </button>
        </div>
    }
}

fn build_form(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    html! {
        <form
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
            style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 10px; margin-bottom: 30px;"
        >
            { for Field::ALL.iter().map(|field| field_input(component, link, *field)) }
            <button
                type="submit"
                style="grid-column: span 2; padding: 12px; border: none; border-radius: 8px; background: #8c1515; color: white; font-weight: bold;"
            >
                { "Add Award" }
            </button>
        </form>
    }
}

fn field_input(component: &AdminPanel, link: &Scope<AdminPanel>, field: Field) -> Html {
    html! {
        <input
            placeholder={field.placeholder()}
            value={component.form.value(field).to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateField(field, input.value())
            })}
            style="padding: 10px; border-radius: 8px; border: 1px solid #ccc;"
        />
    }
}

fn build_table(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    html! {
        <table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="background: #eee;">
                    <th>{ "Award" }</th>
                    <th>{ "Competition" }</th>
                    <th>{ "Year" }</th>
                    <th>{ "Rank" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component.awards.iter().map(|award| table_row(link, award)) }
            </tbody>
        </table>
    }
}

fn table_row(link: &Scope<AdminPanel>, award: &Award) -> Html {
    html! {
        <tr>
            <td>{ award.award_name.clone() }</td>
            <td>{ award.competition.clone() }</td>
            <td>{ award.year.clone() }</td>
            <td>{ award.rank.clone() }</td>
            <td>
                {
                    // A record the store has not echoed back with an id yet
                    // cannot be targeted for deletion.
                    if let Some(id) = award.id.clone() {
                        html! {
                            <button
                                onclick={link.callback(move |_| Msg::Delete(id.clone()))}
                                style="background: red; color: white; border: none; border-radius: 5px; padding: 5px 10px;"
                            >
                                { "Delete" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </td>
        </tr>
    }
}
