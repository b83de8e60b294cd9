use yew::prelude::*;

use crate::components::ParticipantPill;
use crate::markup::server_text;
use crate::model::{Activity, Removal};

pub const EMPTY_ROSTER: &str = "No participants yet";

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
    pub on_remove: Callback<Removal>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;
    let details = &activity.details;

    let roster = if details.participants.is_empty() {
        html! { <p class="participants-empty">{ EMPTY_ROSTER }</p> }
    } else {
        html! {
            <ul class="participants-list">
                { for details.participants.iter().map(|email| html! {
                    <ParticipantPill
                        removal={activity.removal_for(email)}
                        on_remove={props.on_remove.clone()}
                    />
                })}
            </ul>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ server_text(&activity.name) }</h4>
            <p>{ server_text(&details.description) }</p>
            <p><strong>{ "Schedule:" }</strong>{ " " }{ server_text(&details.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {} spots left", activity.spots_left()) }</p>
            <div class="participants-section">
                <h5>{ "Participants" }</h5>
                { roster }
            </div>
        </div>
    }
}
