use crate::base::SignatureBase;
use crate::credentials::ClientCredentials;
use crate::error::SignError;
use crate::v1::values::OAUTH_VALUE_SIGMETHOD_PLAINTEXT;
use crate::v1::SignatureMethod;

/// PLAINTEXT (RFC 5849 section 3.4.4): the signature is the signing key.
#[derive(Clone, Copy, Debug)]
pub struct Plaintext<'a> {
    base: SignatureBase<'a>,
}

impl<'a> Plaintext<'a> {
    pub fn new(credentials: &'a ClientCredentials) -> Self {
        Plaintext {
            base: SignatureBase::new(credentials),
        }
    }
}

impl SignatureMethod for Plaintext<'_> {
    fn method_name(&self) -> &'static str {
        OAUTH_VALUE_SIGMETHOD_PLAINTEXT
    }

    fn credentials(&self) -> &ClientCredentials {
        self.base.credentials()
    }

    fn hash(&self, _base_string: &str) -> Result<Vec<u8>, SignError> {
        self.base.signing_key().map(String::into_bytes)
    }

    // The key is already ASCII; it is sent as-is, not base64'd.
    fn encode(&self, digest: &[u8]) -> String {
        String::from_utf8_lossy(digest).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sign_plaintext() {
        let creds = ClientCredentials::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
            .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");
        let sign = Plaintext::new(&creds)
            .sign("http://photos.example.net/photos", [("file", "vacation.jpg")])
            .unwrap();
        assert_eq!(sign, "kd94hf93k423kf44&pfkkdhi9sl3r4s00");
    }

    #[test]
    fn test_sign_plaintext_without_token() {
        let creds = ClientCredentials::new("ck", "a b");
        let sign = Plaintext::new(&creds)
            .sign("https://example.com/", [("x", "1")])
            .unwrap();
        assert_eq!(sign, "a%20b&");
    }

    #[test]
    fn test_plaintext_rejects_malformed_uri() {
        let creds = ClientCredentials::new("ck", "cs");
        let result = Plaintext::new(&creds).sign("example.com/no-scheme", [("x", "1")]);
        assert!(matches!(result, Err(SignError::MalformedUri { .. })));
    }
}
