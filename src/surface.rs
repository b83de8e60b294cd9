//! What the controller is allowed to do to the page.

use std::time::Duration;

use crate::model::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// The transient message shown above the signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub tone: Tone,
    pub hide_after: Duration,
}

impl Banner {
    pub fn success(text: impl Into<String>, hide_after: Duration) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
            hide_after,
        }
    }

    pub fn error(text: impl Into<String>, hide_after: Duration) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
            hide_after,
        }
    }
}

/// Render target, banner, signup form and confirmation dialog.
pub trait Surface {
    /// Replace every card and every selection option with `catalog`.
    fn render_catalog(&self, catalog: Catalog);

    /// Replace the cards with the static load-failure message.
    fn show_load_failure(&self);

    /// Show `banner` in place of any current one and hide it once
    /// `banner.hide_after` has elapsed, unless a newer banner took its place.
    fn show_banner(&self, banner: Banner);

    fn reset_form(&self);

    /// Blocking yes/no prompt. Anything other than an explicit yes is a no.
    fn confirm(&self, prompt: &str) -> bool;
}
