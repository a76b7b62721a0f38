use thiserror::Error;

/// The two ways a fetch goes wrong: the server answered with a non-success
/// status, or the request never completed at all.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    Request(#[from] gloo_net::Error),
}
