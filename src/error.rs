use thiserror::Error;

/// Errors raised while computing an OAuth signature.
///
/// None of these are transient: signing is a pure computation, so retrying
/// with the same inputs yields the same error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignError {
    /// The request URI has no parseable scheme and host.
    #[error("malformed URI {uri:?}: {reason}")]
    MalformedUri { uri: String, reason: String },

    /// The signature method is unknown, or its primitive rejected the input.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key material required by the signature method is missing.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(&'static str),

    /// The RSA private key could not be parsed.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

impl SignError {
    pub(crate) fn malformed_uri(uri: &str, reason: impl ToString) -> Self {
        SignError::MalformedUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        }
    }
}
