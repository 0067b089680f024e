use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SignError;

pub const OAUTH_VALUE_VERSION: &str = "1.0";

pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";
pub const OAUTH_VALUE_SIGMETHOD_HMACSHA256: &str = "HMAC-SHA256";
pub const OAUTH_VALUE_SIGMETHOD_PLAINTEXT: &str = "PLAINTEXT";
pub const OAUTH_VALUE_SIGMETHOD_RSASHA1: &str = "RSA-SHA1";

/// Signature methods this crate can compute, by protocol name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum SignatureMethodKind {
    PlainText,
    HmacSha1,
    HmacSha256,
    RsaSha1,
}

impl SignatureMethodKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureMethodKind::PlainText => OAUTH_VALUE_SIGMETHOD_PLAINTEXT,
            SignatureMethodKind::HmacSha1 => OAUTH_VALUE_SIGMETHOD_HMACSHA1,
            SignatureMethodKind::HmacSha256 => OAUTH_VALUE_SIGMETHOD_HMACSHA256,
            SignatureMethodKind::RsaSha1 => OAUTH_VALUE_SIGMETHOD_RSASHA1,
        }
    }
}

impl From<SignatureMethodKind> for &'static str {
    fn from(kind: SignatureMethodKind) -> Self {
        kind.as_str()
    }
}

impl fmt::Display for SignatureMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethodKind {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SignatureMethodKind::PlainText,
            SignatureMethodKind::HmacSha1,
            SignatureMethodKind::HmacSha256,
            SignatureMethodKind::RsaSha1,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| SignError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for SignatureMethodKind {
    type Error = SignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Value of `oauth_version`, which the protocol makes optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OAuthVersion<'a> {
    None,
    #[default]
    Default,
    Custom(Cow<'a, str>),
}

impl<'a> From<Option<&'a str>> for OAuthVersion<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(OAUTH_VALUE_VERSION) => OAuthVersion::Default,
            Some(item) => OAuthVersion::Custom(Cow::Borrowed(item)),
            None => OAuthVersion::None,
        }
    }
}

impl<'a> From<OAuthVersion<'a>> for Option<Cow<'a, str>> {
    fn from(version: OAuthVersion<'a>) -> Self {
        match version {
            OAuthVersion::None => None,
            OAuthVersion::Default => Some(Cow::from(OAUTH_VALUE_VERSION)),
            OAuthVersion::Custom(s) => Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_names() {
        assert_eq!(
            "HMAC-SHA256".parse::<SignatureMethodKind>().unwrap(),
            SignatureMethodKind::HmacSha256
        );
        assert_eq!(
            "hmac-sha1".parse::<SignatureMethodKind>().unwrap(),
            SignatureMethodKind::HmacSha1
        );
        assert_eq!(SignatureMethodKind::RsaSha1.to_string(), "RSA-SHA1");
        assert!(matches!(
            "HMAC-MD5".parse::<SignatureMethodKind>(),
            Err(SignError::UnsupportedAlgorithm(name)) if name == "HMAC-MD5"
        ));
    }

    #[test]
    fn test_deserialize_kind() {
        let kind: SignatureMethodKind = serde_json::from_str(r#""PLAINTEXT""#).unwrap();
        assert_eq!(kind, SignatureMethodKind::PlainText);
        assert!(serde_json::from_str::<SignatureMethodKind>(r#""DSA""#).is_err());
    }

    #[test]
    fn test_version_conversions() {
        assert_eq!(OAuthVersion::from(Some("1.0")), OAuthVersion::Default);
        assert_eq!(OAuthVersion::from(None::<&str>), OAuthVersion::None);
        let custom: Option<Cow<str>> = OAuthVersion::from(Some("2.0")).into();
        assert_eq!(custom.as_deref(), Some("2.0"));
        let default: Option<Cow<str>> = OAuthVersion::default().into();
        assert_eq!(default.as_deref(), Some("1.0"));
    }
}
