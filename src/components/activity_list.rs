use yew::prelude::*;

use crate::components::ActivityCard;
use crate::model::Removal;
use crate::page::ListState;

pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub state: ListState,
    pub on_remove: Callback<Removal>,
}

/// The `activities-list` render target. Every render rebuilds it from the
/// current catalog.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let body = match &props.state {
        ListState::Loading => html! { <p>{ LOADING }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED }</p> },
        ListState::Loaded(catalog) => html! {
            <>
                { for catalog.activities().iter().map(|activity| html! {
                    <ActivityCard activity={activity.clone()} on_remove={props.on_remove.clone()} />
                })}
            </>
        },
    };

    html! {
        <div id="activities-list">{ body }</div>
    }
}
