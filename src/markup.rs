//! Escaping for server-supplied text.
//!
//! Names, descriptions, schedules and participant emails come straight from
//! the server and are inserted into the page as markup, so every one of them
//! goes through [`escape_html`] first.

use yew::{AttrValue, Html};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Server text as a markup node.
pub fn server_text(raw: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(escape_html(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_metacharacter() {
        assert_eq!(
            escape_html(r#"<b onclick="x('&')">"#),
            "&lt;b onclick=&quot;x(&#039;&amp;&#039;)&quot;&gt;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("a@x.com"), "a@x.com");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
