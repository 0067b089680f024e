//! OAuth 1.0a signature methods (RFC 5849 section 3.4).

pub mod hmac;
pub mod plaintext;
pub mod rsa;
pub mod signer;
pub mod values;

pub use self::hmac::{HmacSha1, HmacSha256};
pub use self::plaintext::Plaintext;
pub use self::rsa::RsaSha1;
pub use self::signer::Signer;
pub use self::values::{OAuthVersion, SignatureMethodKind};

use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::base::SignatureBase;
use crate::credentials::ClientCredentials;
use crate::error::SignError;

/// HTTP method assumed by [`SignatureMethod::sign`].
pub const DEFAULT_HTTP_METHOD: &str = "POST";

/// A way of turning a signature base string into `oauth_signature`.
///
/// Implementors supply the protocol name and the hash step; building the
/// base string is shared through [`SignatureBase`].
pub trait SignatureMethod {
    /// Value reported as `oauth_signature_method`.
    fn method_name(&self) -> &'static str;

    /// Credentials the signature is keyed with.
    fn credentials(&self) -> &ClientCredentials;

    /// Variant-specific step applied to the base string.
    fn hash(&self, base_string: &str) -> Result<Vec<u8>, SignError>;

    /// Turns the output of [`hash`](Self::hash) into the signature value.
    fn encode(&self, digest: &[u8]) -> String {
        BASE64_STANDARD.encode(digest)
    }

    /// Sign a `POST` request.
    fn sign<I, K, V>(&self, uri: &str, parameters: I) -> Result<String, SignError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.sign_with_method(uri, parameters, DEFAULT_HTTP_METHOD)
    }

    /// Sign a request made with `http_method` (case-insensitive).
    ///
    /// The returned value is not percent-encoded.
    fn sign_with_method<I, K, V>(
        &self,
        uri: &str,
        parameters: I,
        http_method: &str,
    ) -> Result<String, SignError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.credentials().validate()?;
        let base_string = SignatureBase::build_base_string(http_method, uri, parameters)?;
        tracing::debug!(
            signature_method = self.method_name(),
            http_method,
            "computing oauth signature"
        );
        tracing::trace!(%base_string, "signature base string");

        let digest = self.hash(&base_string)?;
        Ok(self.encode(&digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_sign_defaults_to_post() {
        let creds = ClientCredentials::new("ck", "cs");
        let signer = HmacSha1::new(&creds);
        let params = [("a", "1")];
        assert_eq!(
            signer.sign("https://example.com/", params).unwrap(),
            signer
                .sign_with_method("https://example.com/", params, "POST")
                .unwrap()
        );
        assert_eq!(
            signer
                .sign_with_method("https://example.com/", params, "get")
                .unwrap(),
            signer
                .sign_with_method("https://example.com/", params, "GET")
                .unwrap()
        );
    }

    #[test]
    fn test_signers_are_shareable_across_threads() {
        assert_send_sync::<HmacSha1<'static>>();
        assert_send_sync::<Signer<'static>>();

        let creds = ClientCredentials::new("ck", "cs").with_token("t", "ts");
        let signer = HmacSha256::new(&creds);
        let params = [("oauth_nonce", "n"), ("oauth_timestamp", "1")];
        let expected = signer.sign("https://example.com/", params).unwrap();

        let signer = &signer;
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(move || signer.sign("https://example.com/", params).unwrap()))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
