/// Remote inventory and changeset fetch errors. Any of these aborts a
/// `compute_state` call as a whole — local-only status cannot be rendered
/// without the remote comparison point.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("server returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },
}
