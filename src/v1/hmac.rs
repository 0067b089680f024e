use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::base::SignatureBase;
use crate::credentials::ClientCredentials;
use crate::error::SignError;
use crate::v1::values::{OAUTH_VALUE_SIGMETHOD_HMACSHA1, OAUTH_VALUE_SIGMETHOD_HMACSHA256};
use crate::v1::SignatureMethod;

macro_rules! hmac_signature_method {
    ($(#[$doc:meta])* $name:ident, $digest:ty, $method_name:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<'a> {
            base: SignatureBase<'a>,
        }

        impl<'a> $name<'a> {
            pub fn new(credentials: &'a ClientCredentials) -> Self {
                $name {
                    base: SignatureBase::new(credentials),
                }
            }
        }

        impl SignatureMethod for $name<'_> {
            fn method_name(&self) -> &'static str {
                $method_name
            }

            fn credentials(&self) -> &ClientCredentials {
                self.base.credentials()
            }

            fn hash(&self, base_string: &str) -> Result<Vec<u8>, SignError> {
                let sign_key = self.base.signing_key()?;
                let mut mac = Hmac::<$digest>::new_from_slice(sign_key.as_bytes())
                    .map_err(|e| SignError::UnsupportedAlgorithm(format!("{}: {}", $method_name, e)))?;
                mac.update(base_string.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    };
}

hmac_signature_method! {
    /// HMAC-SHA1 (RFC 5849 section 3.4.2).
    HmacSha1, Sha1, OAUTH_VALUE_SIGMETHOD_HMACSHA1
}

hmac_signature_method! {
    /// HMAC-SHA256, same construction as HMAC-SHA1 with a 32-byte digest.
    HmacSha256, Sha256, OAUTH_VALUE_SIGMETHOD_HMACSHA256
}
