use yew::prelude::*;

use crate::markup::server_text;
use crate::surface::Banner;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub banner: Option<Banner>,
}

/// The `message` element. Always present; hidden when there is no banner.
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match &props.banner {
        Some(banner) => html! {
            <div id="message" class={classes!("message", banner.tone.class())}>
                { server_text(&banner.text) }
            </div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use yew::ServerRenderer;

    use super::*;

    #[tokio::test]
    async fn shows_tone_and_escaped_text() {
        let html = ServerRenderer::<MessageBanner>::with_props(|| MessageBannerProps {
            banner: Some(Banner::error("<b>Already</b> signed up", Duration::from_secs(5))),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("message error"));
        assert!(html.contains("&lt;b&gt;Already&lt;/b&gt; signed up"));
    }

    #[tokio::test]
    async fn hidden_without_banner() {
        let html = ServerRenderer::<MessageBanner>::with_props(|| MessageBannerProps { banner: None })
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("id=\"message\""));
        assert!(html.contains("hidden"));
    }
}
