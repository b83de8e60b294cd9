use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::markup::server_text;

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names from the last successful refresh.
    pub options: Rc<Vec<String>>,
    pub email: String,
    pub selected: String,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            on_select.emit(select.value());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required={true}
                    placeholder="your-email@mergington.edu"
                    value={props.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required={true} {onchange}>
                    <option value="" selected={props.selected.is_empty()}>{ PLACEHOLDER_OPTION }</option>
                    { for props.options.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == props.selected}>
                            { server_text(name) }
                        </option>
                    })}
                </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render(options: &'static [&'static str], selected: &'static str) -> String {
        ServerRenderer::<SignupForm>::with_props(move || SignupFormProps {
            options: Rc::new(options.iter().map(|o| o.to_string()).collect()),
            email: String::new(),
            selected: selected.to_string(),
            on_email: Callback::noop(),
            on_select: Callback::noop(),
            on_submit: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn placeholder_comes_first_then_catalog_order() {
        let html = render(&["Zumba", "Chess Club", "Art"], "").await;

        assert_eq!(html.matches("<option").count(), 4);
        let placeholder = html.find(PLACEHOLDER_OPTION).unwrap();
        let zumba = html.find(">Zumba<").unwrap();
        let chess = html.find(">Chess Club<").unwrap();
        let art = html.find(">Art<").unwrap();
        assert!(placeholder < zumba && zumba < chess && chess < art);

        let first_option = &html[html.find("<option").unwrap()..placeholder];
        assert!(first_option.contains("value=\"\""));
        assert!(first_option.contains("selected"));
    }

    #[tokio::test]
    async fn option_text_is_escaped() {
        let html = render(&["Chess Club", "A<b>&'\""], "").await;

        assert!(html.contains(">A&lt;b&gt;&amp;&#039;&quot;</option>"));
        assert!(!html.contains("<b>"));
    }

    #[tokio::test]
    async fn option_value_cannot_break_out_of_its_attribute() {
        let html = render(&["A<b>&'\""], "").await;
        assert!(html.contains("value=\"A&lt;b&gt;&amp;'&quot;\""));
    }

    #[tokio::test]
    async fn current_selection_is_marked() {
        let html = render(&["Zumba", "Chess Club"], "Chess Club").await;

        let placeholder_tag = &html[html.find("<option").unwrap()..html.find(PLACEHOLDER_OPTION).unwrap()];
        assert!(!placeholder_tag.contains("selected"));

        let chess_start = html.find("value=\"Chess Club\"").unwrap();
        let chess_tag = &html[chess_start..chess_start + html[chess_start..].find('>').unwrap()];
        assert!(chess_tag.contains("selected"));
    }

    #[tokio::test]
    async fn form_carries_page_ids() {
        let html = render(&[], "").await;
        assert!(html.contains("id=\"signup-form\""));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"activity\""));
        assert_eq!(html.matches("<option").count(), 1);
    }
}
