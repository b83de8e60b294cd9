use thiserror::Error;

/// A request that never produced a usable answer.
///
/// Application-level failures (a non-2xx reply with a JSON body) are not
/// errors here; they travel as an [`ApiReply`](crate::model::ApiReply).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}
