use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The JSON shape the storefront service uses for error responses.
///
/// The auth endpoints report under `message`, every other family under
/// `detail`. Both fields are optional because the service can answer with an
/// empty body or a shape we do not recognize, in which case the caller falls
/// back to a canned message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
}

/// Failure raised below the operation layer, before any per-operation
/// normalization is applied.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The service answered with a non-success status code.
    #[error("storefront api returned HTTP {status}")]
    Status { status: u16, body: ErrorBody },
    /// The exchange never produced a response (connect failure, timeout, ...).
    #[error("could not reach the storefront api: {0}")]
    Network(String),
    /// A request body could not be encoded or a response body decoded.
    #[error("could not translate a storefront api payload: {0}")]
    Decode(String),
}

impl TransportError {
    /// Status code of the response, when the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// What an operation hands back to the caller when it fails.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A failure the service reported (or one reported on its behalf),
    /// reduced to a single message fit for display.
    #[error("{0}")]
    Remote(String),
    /// A failure outside the service's request/response contract, passed
    /// through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
