//! Error taxonomy for store/server synchronization.

use thiserror::Error;

/// Failures surfaced to the user by synchronizer operations.
///
/// `Validation` never reaches the network; `Network` covers transport
/// failures and non-success statuses; `Decode` covers responses that do not
/// match the service contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error("{0}")]
    Validation(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SyncError {
    pub fn empty_text() -> Self {
        SyncError::Validation("Vous devez écrire quelque chose !".to_string())
    }
}

impl From<gloo_net::Error> for SyncError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => SyncError::Decode(e.to_string()),
            other => SyncError::Network(other.to_string()),
        }
    }
}
