//! Client credentials used to key every signature method.

use serde::Deserialize;

use crate::error::SignError;

/// Consumer and (optional) token credentials.
///
/// Signers borrow a `ClientCredentials` for their whole lifetime, so the
/// values cannot change underneath an in-flight signing call.
#[derive(Clone, Deserialize)]
pub struct ClientCredentials {
    consumer_key: String,
    #[serde(default)]
    consumer_secret: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    token_secret: Option<String>,
}

impl ClientCredentials {
    /// Credentials for a consumer that signs with a shared secret.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        ClientCredentials {
            consumer_key: consumer_key.into(),
            consumer_secret: Some(consumer_secret.into()),
            token: None,
            token_secret: None,
        }
    }

    /// Credentials without a consumer secret, as used with RSA-SHA1.
    pub fn without_secret(consumer_key: impl Into<String>) -> Self {
        ClientCredentials {
            consumer_key: consumer_key.into(),
            consumer_secret: None,
            token: None,
            token_secret: None,
        }
    }

    /// Attach a temporary or token credential pair.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Load credentials from `<PREFIX>_CONSUMER_KEY`, `<PREFIX>_CONSUMER_SECRET`,
    /// `<PREFIX>_TOKEN` and `<PREFIX>_TOKEN_SECRET`.
    ///
    /// # Errors
    /// Returns `SignError::InvalidCredentials` if the consumer key is not set.
    pub fn from_env(prefix: &str) -> Result<Self, SignError> {
        let var = |name: &str| std::env::var(format!("{}_{}", prefix, name)).ok();

        let consumer_key = var("CONSUMER_KEY")
            .ok_or(SignError::InvalidCredentials("consumer key is not set"))?;
        let credentials = ClientCredentials {
            consumer_key,
            consumer_secret: var("CONSUMER_SECRET"),
            token: var("TOKEN"),
            token_secret: var("TOKEN_SECRET"),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Check the key material every signature method needs.
    pub fn validate(&self) -> Result<(), SignError> {
        if self.consumer_key.is_empty() {
            return Err(SignError::InvalidCredentials("consumer key is empty"));
        }
        Ok(())
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Never log or display the return value.
    pub fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Never log or display the return value.
    pub fn token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ClientCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("token", &self.token)
            .field("token_secret", &redact(&self.token_secret))
            .finish()
    }
}
