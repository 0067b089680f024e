use std::borrow::Cow;

use chrono::Utc;
use uuid::Uuid;

use crate::credentials::ClientCredentials;
use crate::v1::{OAuthVersion, SignatureMethod};

pub const OAUTH_PARAM_KEY_CALLBACK: &str = "oauth_callback";
pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";
pub const OAUTH_PARAM_KEY_VERIFIER: &str = "oauth_verifier";

/// Builder for the `oauth_*` protocol parameters of a request.
///
/// Nonce and timestamp are generated at [`build`](Self::build) time unless
/// pinned. The output is an ordinary parameter list: append the request's
/// own parameters to it and hand it to a signature method.
#[derive(Clone, Debug)]
pub struct ProtocolParameters<'a> {
    consumer_key: Cow<'a, str>,
    token: Option<Cow<'a, str>>,
    signature_method: &'static str,
    nonce: Option<Cow<'a, str>>,
    timestamp: Option<i64>,
    version: OAuthVersion<'a>,
    callback: Option<Cow<'a, str>>,
    verifier: Option<Cow<'a, str>>,
}

impl<'a> ProtocolParameters<'a> {
    pub fn new<S: SignatureMethod>(
        credentials: &'a ClientCredentials,
        signature_method: &S,
    ) -> Self {
        ProtocolParameters {
            consumer_key: Cow::Borrowed(credentials.consumer_key()),
            token: credentials.token().map(Cow::Borrowed),
            signature_method: signature_method.method_name(),
            nonce: None,
            timestamp: None,
            version: OAuthVersion::Default,
            callback: None,
            verifier: None,
        }
    }

    pub fn nonce(mut self, nonce: impl Into<Cow<'a, str>>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn version(mut self, version: OAuthVersion<'a>) -> Self {
        self.version = version;
        self
    }

    pub fn callback(mut self, callback: impl Into<Cow<'a, str>>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    pub fn verifier(mut self, verifier: impl Into<Cow<'a, str>>) -> Self {
        self.verifier = Some(verifier.into());
        self
    }

    /// Unencoded `(key, value)` pairs, omitting unset optional parameters.
    pub fn build(self) -> Vec<(&'static str, Cow<'a, str>)> {
        let timestamp = self.timestamp.unwrap_or_else(|| Utc::now().timestamp());
        let nonce = self
            .nonce
            .unwrap_or_else(|| Cow::Owned(format!("{}", Uuid::new_v4())));

        let params = vec![
            (OAUTH_PARAM_KEY_CONSUMER_KEY, Some(self.consumer_key)),
            (OAUTH_PARAM_KEY_TOKEN, self.token),
            (
                OAUTH_PARAM_KEY_SIGNATURE_METHOD,
                Some(Cow::Borrowed(self.signature_method)),
            ),
            (
                OAUTH_PARAM_KEY_TIMESTAMP,
                Some(Cow::Owned(timestamp.to_string())),
            ),
            (OAUTH_PARAM_KEY_NONCE, Some(nonce)),
            (OAUTH_PARAM_KEY_VERSION, self.version.into()),
            (OAUTH_PARAM_KEY_CALLBACK, self.callback),
            (OAUTH_PARAM_KEY_VERIFIER, self.verifier),
        ];
        params
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::{HmacSha1, Plaintext};
    use pretty_assertions::assert_eq;

    fn value<'a>(params: &'a [(&'static str, Cow<'a, str>)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
    }

    #[test]
    fn test_build_signs_rfc5849_request() {
        // https://tools.ietf.org/html/rfc5849#section-2.1
        let creds = ClientCredentials::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44");
        let signer = HmacSha1::new(&creds);
        let params = ProtocolParameters::new(&creds, &signer)
            .nonce("wIjqoS")
            .timestamp(137_131_200)
            .version(OAuthVersion::None)
            .callback("http://printer.example.com/ready")
            .build();

        let sign = signer
            .sign("https://photos.example.net/initiate", params)
            .unwrap();
        assert_eq!(sign, "74KNZJeDHnMBp0EMJ9ZHt/XKycU=");
    }

    #[test]
    fn test_build_defaults() {
        let creds = ClientCredentials::new("ck", "cs").with_token("tok", "ts");
        let signer = Plaintext::new(&creds);
        let params = ProtocolParameters::new(&creds, &signer).build();

        assert_eq!(value(&params, OAUTH_PARAM_KEY_CONSUMER_KEY), Some("ck"));
        assert_eq!(value(&params, OAUTH_PARAM_KEY_TOKEN), Some("tok"));
        assert_eq!(
            value(&params, OAUTH_PARAM_KEY_SIGNATURE_METHOD),
            Some("PLAINTEXT")
        );
        assert_eq!(value(&params, OAUTH_PARAM_KEY_VERSION), Some("1.0"));
        assert_eq!(value(&params, OAUTH_PARAM_KEY_CALLBACK), None);
        assert_eq!(value(&params, OAUTH_PARAM_KEY_VERIFIER), None);
        assert!(value(&params, OAUTH_PARAM_KEY_TIMESTAMP)
            .unwrap()
            .parse::<i64>()
            .is_ok());
    }

    #[test]
    fn test_nonce_uniqueness() {
        let creds = ClientCredentials::new("ck", "cs");
        let signer = HmacSha1::new(&creds);
        let first = ProtocolParameters::new(&creds, &signer).build();
        let second = ProtocolParameters::new(&creds, &signer).build();
        assert_ne!(
            value(&first, OAUTH_PARAM_KEY_NONCE),
            value(&second, OAUTH_PARAM_KEY_NONCE)
        );
    }

    #[test]
    fn test_no_token_without_token_credentials() {
        let creds = ClientCredentials::new("ck", "cs");
        let signer = HmacSha1::new(&creds);
        let params = ProtocolParameters::new(&creds, &signer)
            .verifier("hfdp7dh39dks9884")
            .build();
        assert_eq!(value(&params, OAUTH_PARAM_KEY_TOKEN), None);
        assert_eq!(
            value(&params, OAUTH_PARAM_KEY_VERIFIER),
            Some("hfdp7dh39dks9884")
        );
    }
}
