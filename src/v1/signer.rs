use rsa::RsaPrivateKey;

use crate::credentials::ClientCredentials;
use crate::error::SignError;
use crate::v1::{HmacSha1, HmacSha256, Plaintext, RsaSha1, SignatureMethod, SignatureMethodKind};

/// Any supported signature method, chosen at runtime.
#[derive(Debug)]
pub enum Signer<'a> {
    PlainText(Plaintext<'a>),
    HmacSha1(HmacSha1<'a>),
    HmacSha256(HmacSha256<'a>),
    RsaSha1(RsaSha1<'a>),
}

impl<'a> Signer<'a> {
    /// Build a symmetric signer for `kind`.
    ///
    /// # Errors
    /// `InvalidCredentials` if the credentials lack what `kind` needs; use
    /// [`Signer::rsa_sha1`] for RSA-SHA1, which needs a private key.
    pub fn new(
        kind: SignatureMethodKind,
        credentials: &'a ClientCredentials,
    ) -> Result<Self, SignError> {
        credentials.validate()?;
        let signer = match kind {
            SignatureMethodKind::PlainText => Signer::PlainText(Plaintext::new(credentials)),
            SignatureMethodKind::HmacSha1 => Signer::HmacSha1(HmacSha1::new(credentials)),
            SignatureMethodKind::HmacSha256 => Signer::HmacSha256(HmacSha256::new(credentials)),
            SignatureMethodKind::RsaSha1 => {
                return Err(SignError::InvalidCredentials("RSA-SHA1 requires a private key"))
            }
        };
        if credentials.consumer_secret().is_none() {
            return Err(SignError::InvalidCredentials("consumer secret is required"));
        }
        Ok(signer)
    }

    /// Build a signer from an `oauth_signature_method` name.
    pub fn from_name(name: &str, credentials: &'a ClientCredentials) -> Result<Self, SignError> {
        Signer::new(name.parse()?, credentials)
    }

    /// Build an RSA-SHA1 signer; no consumer secret is needed.
    pub fn rsa_sha1(
        credentials: &'a ClientCredentials,
        private_key: RsaPrivateKey,
    ) -> Result<Self, SignError> {
        credentials.validate()?;
        Ok(Signer::RsaSha1(RsaSha1::new(credentials, private_key)))
    }

    pub fn kind(&self) -> SignatureMethodKind {
        match self {
            Signer::PlainText(_) => SignatureMethodKind::PlainText,
            Signer::HmacSha1(_) => SignatureMethodKind::HmacSha1,
            Signer::HmacSha256(_) => SignatureMethodKind::HmacSha256,
            Signer::RsaSha1(_) => SignatureMethodKind::RsaSha1,
        }
    }
}

impl SignatureMethod for Signer<'_> {
    fn method_name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn credentials(&self) -> &ClientCredentials {
        match self {
            Signer::PlainText(s) => s.credentials(),
            Signer::HmacSha1(s) => s.credentials(),
            Signer::HmacSha256(s) => s.credentials(),
            Signer::RsaSha1(s) => s.credentials(),
        }
    }

    fn hash(&self, base_string: &str) -> Result<Vec<u8>, SignError> {
        match self {
            Signer::PlainText(s) => s.hash(base_string),
            Signer::HmacSha1(s) => s.hash(base_string),
            Signer::HmacSha256(s) => s.hash(base_string),
            Signer::RsaSha1(s) => s.hash(base_string),
        }
    }

    fn encode(&self, digest: &[u8]) -> String {
        match self {
            Signer::PlainText(s) => s.encode(digest),
            Signer::HmacSha1(s) => s.encode(digest),
            Signer::HmacSha256(s) => s.encode(digest),
            Signer::RsaSha1(s) => s.encode(digest),
        }
    }
}
