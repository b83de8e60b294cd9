//! The REST contract with the activities service.

use gloo_net::http::Request;
use web_sys::RequestCache;

use crate::error::ClientError;
use crate::model::{ApiReply, Catalog, ReplyBody};

/// Everything the controller needs from the server.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// `GET /activities`, always bypassing caches.
    async fn fetch_catalog(&self) -> Result<Catalog, ClientError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ClientError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ClientError>;
}

/// Builds endpoint URLs under a base such as `""` (same origin) or
/// `https://api.example.org/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup(&self, activity: &str, email: &str) -> String {
        self.mutation(activity, "signup", email)
    }

    pub fn unregister(&self, activity: &str, email: &str) -> String {
        self.mutation(activity, "unregister", email)
    }

    fn mutation(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }
}

/// [`Transport`] over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(api_base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(api_base),
        }
    }
}

async fn read_reply(resp: gloo_net::http::Response) -> Result<ApiReply, ClientError> {
    let status = resp.status();
    let body = resp.json::<ReplyBody>().await?;
    Ok(ApiReply { status, body })
}

impl Transport for HttpTransport {
    async fn fetch_catalog(&self) -> Result<Catalog, ClientError> {
        let url = self.endpoints.activities();
        tracing::debug!(%url, "fetching catalog");

        let resp = Request::get(&url)
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        if !resp.ok() {
            return Err(ClientError::Status(resp.status()));
        }
        Ok(resp.json::<Catalog>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ClientError> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!(%url, "signing up");

        let resp = Request::post(&url).send().await?;
        read_reply(resp).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ClientError> {
        let url = self.endpoints.unregister(activity, email);
        tracing::debug!(%url, "unregistering");

        let resp = Request::delete(&url).send().await?;
        read_reply(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_paths() {
        let e = Endpoints::new("");
        assert_eq!(e.activities(), "/activities");
        assert_eq!(
            e.signup("Chess Club", "a@x.com"),
            "/activities/Chess%20Club/signup?email=a%40x.com"
        );
    }

    #[test]
    fn path_and_query_are_percent_encoded() {
        let e = Endpoints::new("");
        assert_eq!(
            e.unregister("Art & Craft/2", "a+b@x.com"),
            "/activities/Art%20%26%20Craft%2F2/unregister?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let e = Endpoints::new("https://api.example.org/");
        assert_eq!(e.activities(), "https://api.example.org/activities");
    }
}
