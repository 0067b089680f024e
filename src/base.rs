//! Signature base string construction (RFC 5849 section 3.4.1) and signing
//! key derivation, shared by every signature method.

use crate::credentials::ClientCredentials;
use crate::encoder;
use crate::error::SignError;
use crate::parameters::OAUTH_PARAM_KEY_SIGNATURE;
use crate::util;


/// Borrows the caller's credentials and derives everything a signature
/// method needs from them. Holds no other state.
#[derive(Clone, Copy, Debug)]
pub struct SignatureBase<'a> {
    credentials: &'a ClientCredentials,
}

impl<'a> SignatureBase<'a> {
    pub fn new(credentials: &'a ClientCredentials) -> Self {
        SignatureBase { credentials }
    }

    pub fn credentials(&self) -> &'a ClientCredentials {
        self.credentials
    }

    /// See [`encoder::percent_encode`].
    pub fn percent_encode(value: &str) -> String {
        encoder::percent_encode(value)
    }

    /// See [`util::normalize_url`].
    pub fn normalize_url(uri: &str) -> Result<String, SignError> {
        util::normalize_url(uri)
    }

    /// Normalized request parameters (RFC 5849 section 3.4.1.3.2).
    ///
    /// Every key and value is percent-encoded, then pairs are sorted by
    /// encoded key and, for repeated keys, by encoded value.
    pub fn normalize_parameters<I, K, V>(parameters: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut encoded = parameters
            .into_iter()
            .map(|(k, v)| {
                (
                    encoder::percent_encode(k.as_ref()),
                    encoder::percent_encode(v.as_ref()),
                )
            })
            .collect::<Vec<(String, String)>>();
        // `String` ordering is byte-wise.
        encoded.sort();
        encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&")
    }

    /// Signature base string: `METHOD&url&parameters`, each part encoded.
    ///
    /// Query parameters carried by `uri` are signed along with `parameters`;
    /// `oauth_signature` is left out. `realm` is only excluded when it comes
    /// from the `Authorization` header, so callers must not pass that one in.
    pub fn build_base_string<I, K, V>(
        http_method: &str,
        uri: &str,
        parameters: I,
    ) -> Result<String, SignError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = util::parse_uri(uri)?;
        let endpoint = util::url_to_endpoint(&url);
        let params = parameters
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .chain(util::url_to_queries(&url))
            .filter(|(k, _)| k.as_str() != OAUTH_PARAM_KEY_SIGNATURE);
        let normalized = Self::normalize_parameters(params);

        let http_method = http_method.to_ascii_uppercase();
        Ok(format!(
            "{}&{}&{}",
            encoder::percent_encode(&http_method),
            encoder::percent_encode(&endpoint),
            encoder::percent_encode(&normalized)
        ))
    }

    /// `encode(consumer_secret)&encode(token_secret)`.
    ///
    /// A missing token secret yields a trailing bare `&`.
    pub fn signing_key(&self) -> Result<String, SignError> {
        let consumer_secret = self
            .credentials
            .consumer_secret()
            .ok_or(SignError::InvalidCredentials("consumer secret is required"))?;
        let token_secret = self.credentials.token_secret().unwrap_or("");
        Ok(format!(
            "{}&{}",
            encoder::percent_encode(consumer_secret),
            encoder::percent_encode(token_secret)
        ))
    }
}
