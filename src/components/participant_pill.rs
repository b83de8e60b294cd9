use yew::prelude::*;

use crate::markup::server_text;
use crate::model::Removal;

#[derive(Properties, PartialEq)]
pub struct ParticipantPillProps {
    pub removal: Removal,
    pub on_remove: Callback<Removal>,
}

/// One registered email plus its removal control.
#[function_component(ParticipantPill)]
pub fn participant_pill(props: &ParticipantPillProps) -> Html {
    let onclick = {
        let removal = props.removal.clone();
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(removal.clone()))
    };

    html! {
        <li class="participant-pill">
            { server_text(&props.removal.email) }
            { " " }
            <button type="button" class="remove-btn" title="Unregister" {onclick}>{ "✕" }</button>
        </li>
    }
}
