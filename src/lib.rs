//! OAuth 1.0a request signatures (RFC 5849).
//!
//! Builds the signature base string from a request's method, URI and
//! parameters and signs it with one of the supported signature methods.
//! Nonce/timestamp generation is available through [`ProtocolParameters`]
//! but signing itself is a pure function of its inputs.
//!
//! ```
//! # fn main() -> Result<(), oauth1sign::SignError> {
//! use oauth1sign::{ClientCredentials, HmacSha1, ProtocolParameters, SignatureMethod};
//!
//! let credentials = ClientCredentials::new("consumer_key", "consumer_secret")
//!     .with_token("token", "token_secret");
//! let signer = HmacSha1::new(&credentials);
//!
//! let mut params = ProtocolParameters::new(&credentials, &signer).build();
//! params.push(("status", "hello".into()));
//! let signature = signer.sign_with_method("https://api.example.com/1/update", params, "POST")?;
//! assert!(!signature.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod v1;

mod base;
mod credentials;
mod encoder;
mod error;
mod parameters;
mod util;

pub use base::SignatureBase;
pub use credentials::ClientCredentials;
pub use encoder::percent_encode;
pub use error::SignError;
pub use parameters::*;
pub use util::normalize_url;
pub use v1::{
    HmacSha1, HmacSha256, OAuthVersion, Plaintext, RsaSha1, SignatureMethod, SignatureMethodKind,
    Signer,
};
