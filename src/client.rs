//! The signup controller.
//!
//! Each operation is a straight line of awaits: request, decode, then render.
//! Nothing is cancelled or de-duplicated, so when operations overlap the last
//! response to arrive decides what the page shows.

use std::time::Duration;

use crate::api::Transport;
use crate::config::ClientConfig;
use crate::model::{ApiReply, Removal};
use crate::surface::{Banner, Surface};

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerTiming {
    pub signup: Duration,
    pub unregister: Duration,
}

impl From<&ClientConfig> for BannerTiming {
    fn from(cfg: &ClientConfig) -> Self {
        Self {
            signup: Duration::from_millis(cfg.signup_banner_ms),
            unregister: Duration::from_millis(cfg.unregister_banner_ms),
        }
    }
}

impl Default for BannerTiming {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

pub struct ActivityClient<T, S> {
    transport: T,
    surface: S,
    timing: BannerTiming,
}

impl<T: Transport, S: Surface> ActivityClient<T, S> {
    pub fn new(transport: T, surface: S, timing: BannerTiming) -> Self {
        Self {
            transport,
            surface,
            timing,
        }
    }

    /// Fetch the catalog and redraw everything from it.
    pub async fn refresh(&self) {
        match self.transport.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(activities = catalog.len(), "catalog loaded");
                self.surface.render_catalog(catalog);
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching activities");
                self.surface.show_load_failure();
            }
        }
    }

    pub async fn signup(&self, email: &str, activity: &str) {
        let hide_after = self.timing.signup;
        match self.transport.signup(activity, email).await {
            Ok(reply) if reply.is_success() => {
                self.surface
                    .show_banner(Banner::success(reply.body.message.unwrap_or_default(), hide_after));
                self.surface.reset_form();
                self.refresh().await;
            }
            Ok(reply) => {
                tracing::warn!(status = reply.status, %activity, "signup rejected");
                self.surface
                    .show_banner(Banner::error(signup_error_text(reply), hide_after));
            }
            Err(e) => {
                tracing::error!(error = %e, "error signing up");
                self.surface.show_banner(Banner::error(SIGNUP_FAILED, hide_after));
            }
        }
    }

    /// Ask first; a declined prompt sends nothing.
    pub async fn unregister(&self, removal: Removal) {
        if !self.surface.confirm(&removal.confirmation_prompt()) {
            tracing::debug!(activity = %removal.activity, "unregister declined");
            return;
        }

        let hide_after = self.timing.unregister;
        match self
            .transport
            .unregister(&removal.activity, &removal.email)
            .await
        {
            Ok(reply) if reply.is_success() => {
                self.surface
                    .show_banner(Banner::success(reply.body.message.unwrap_or_default(), hide_after));
                self.refresh().await;
            }
            Ok(reply) => {
                tracing::warn!(status = reply.status, activity = %removal.activity, "unregister rejected");
                self.surface
                    .show_banner(Banner::error(unregister_error_text(reply), hide_after));
            }
            Err(e) => {
                tracing::error!(error = %e, "error unregistering");
                self.surface
                    .show_banner(Banner::error(UNREGISTER_FAILED, hide_after));
            }
        }
    }
}

// The two endpoints disagree on which field carries the reason, so each
// path keeps its own lookup order.
fn signup_error_text(reply: ApiReply) -> String {
    reply
        .body
        .detail
        .unwrap_or_else(|| SIGNUP_FALLBACK.to_string())
}

fn unregister_error_text(reply: ApiReply) -> String {
    reply
        .body
        .detail
        .or(reply.body.message)
        .unwrap_or_else(|| UNREGISTER_FALLBACK.to_string())
}
