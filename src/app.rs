//! Root component: owns the page state and the controller.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpTransport;
use crate::client::{ActivityClient, BannerTiming};
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::ClientConfig;
use crate::model::Removal;
use crate::page::{FormState, ListState, PageSurface};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let list = use_state(|| ListState::Loading);
    let options = use_state(|| Rc::new(Vec::<String>::new()));
    let banner = use_state(|| None);
    let form = use_state(FormState::default);

    let client = {
        let surface = PageSurface::new(
            list.clone(),
            options.clone(),
            banner.clone(),
            form.clone(),
        );
        let config = props.config.clone();
        use_memo((), move |_| {
            ActivityClient::new(
                HttpTransport::new(&config.api_base),
                surface,
                BannerTiming::from(&config),
            )
        })
    };

    // Initial load
    {
        let client = client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { client.refresh().await });
            || ()
        });
    }

    let on_remove = {
        let client = client.clone();
        Callback::from(move |removal: Removal| {
            let client = client.clone();
            spawn_local(async move { client.unregister(removal).await });
        })
    };

    let on_submit = {
        let client = client.clone();
        let FormState { email, selected } = (*form).clone();
        Callback::from(move |()| {
            let client = client.clone();
            let email = email.clone();
            let activity = selected.clone();
            spawn_local(async move { client.signup(&email, &activity).await });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(FormState {
                email,
                ..(*form).clone()
            })
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |selected: String| {
            form.set(FormState {
                selected,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="wrap">
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>

            <main>
                <section id="activities-container">
                    <h3>{ "Available Activities" }</h3>
                    <ActivityList state={(*list).clone()} {on_remove} />
                </section>

                <section id="signup-container">
                    <h3>{ "Sign Up for an Activity" }</h3>
                    <SignupForm
                        options={(*options).clone()}
                        email={form.email.clone()}
                        selected={form.selected.clone()}
                        {on_email}
                        {on_select}
                        {on_submit}
                    />
                    <MessageBanner banner={(*banner).clone()} />
                </section>
            </main>
        </div>
    }
}
