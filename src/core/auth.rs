//! `IAPIS` request authentication.
//!
//! Every call to the remote service carries a header
//! `IAPIS user=<email>, hmac-sha1=<hex>` where the digest is an HMAC-SHA1,
//! keyed by the hex-decoded API token, over
//! `url ++ email ++ "faktura" ++ body`.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::error::IfirmaError;

type HmacSha1 = Hmac<Sha1>;

/// Name of the HTTP header carrying the signature.
pub const AUTH_HEADER: &str = "Authentication";

/// Key name the invoice API token is registered under.
pub const KEY_NAME: &str = "faktura";

/// Signs requests for one account with one API token.
#[derive(Clone)]
pub struct Signer {
    user: String,
    mac: HmacSha1,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl Signer {
    /// Create a signer from the account email and the hex-encoded token.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::Token` if the token is not valid hex. Surrounding
    /// whitespace is not stripped.
    pub fn new(user: impl Into<String>, hex_token: &str) -> Result<Self, IfirmaError> {
        let key = hex::decode(hex_token).map_err(|e| IfirmaError::Token(e.to_string()))?;
        let mac = HmacSha1::new_from_slice(&key).map_err(|e| IfirmaError::Token(e.to_string()))?;
        Ok(Self {
            user: user.into(),
            mac,
        })
    }

    /// Account email the signatures are issued for.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Lowercase hex HMAC-SHA1 over `url`, user, key name and `body`.
    pub fn digest(&self, url: &str, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(url.as_bytes());
        mac.update(self.user.as_bytes());
        mac.update(KEY_NAME.as_bytes());
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Full header value for a call to `url` sending `body`.
    pub fn authorization(&self, url: &str, body: &[u8]) -> String {
        format!("IAPIS user={}, hmac-sha1={}", self.user, self.digest(url, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "00112233445566778899aabbccddeeff";
    const URL: &str = "https://www.ifirma.pl/iapi/fakturakraj.json";

    #[test]
    fn header_format() {
        let signer = Signer::new("jan@example.com", TOKEN).unwrap();
        let header = signer.authorization(URL, b"{}");
        assert!(header.starts_with("IAPIS user=jan@example.com, hmac-sha1="));
        let digest = header.rsplit('=').next().unwrap();
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn digest_matches_manual_hmac() {
        let signer = Signer::new("jan@example.com", TOKEN).unwrap();
        let body = br#"{"a":1}"#;

        let mut mac = HmacSha1::new_from_slice(&hex::decode(TOKEN).unwrap()).unwrap();
        let mut message = Vec::new();
        message.extend_from_slice(URL.as_bytes());
        message.extend_from_slice(b"jan@example.com");
        message.extend_from_slice(b"faktura");
        message.extend_from_slice(body);
        mac.update(&message);
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(signer.digest(URL, body), expected);
    }

    #[test]
    fn invalid_token_rejected() {
        let err = Signer::new("jan@example.com", "not-hex").unwrap_err();
        assert!(matches!(err, IfirmaError::Token(_)));
        assert!(Signer::new("jan@example.com", "abc").is_err());
    }

    #[test]
    fn whitespace_around_token_rejected() {
        assert!(matches!(
            Signer::new("jan@example.com", &format!(" {TOKEN}\n")),
            Err(IfirmaError::Token(_))
        ));
    }

    #[test]
    fn debug_hides_key() {
        let signer = Signer::new("jan@example.com", TOKEN).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains("jan@example.com"));
        assert!(!debug.contains(TOKEN));
    }
}
