use std::fmt;

use crate::core::{IfirmaError, Signer};

/// Environment variable holding the hex-encoded invoice API token.
pub const TOKEN_VAR: &str = "IFIRMA_FV_TOKEN";

/// Environment variable holding the account email.
pub const EMAIL_VAR: &str = "IFIRMA_EMAIL";

/// Account credentials used to sign API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::Credentials` naming the first missing variable.
    pub fn from_env() -> Result<Self, IfirmaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IfirmaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    IfirmaError::Credentials(format!("environment variable {name} not defined"))
                })
        };
        Ok(Self {
            token: required(TOKEN_VAR)?,
            email: required(EMAIL_VAR)?,
        })
    }

    /// Build the request signer for these credentials.
    pub fn signer(&self) -> Result<Signer, IfirmaError> {
        Signer::new(self.email.clone(), &self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_both_variables() {
        let vars = env(&[(TOKEN_VAR, "abcd"), (EMAIL_VAR, "jan@example.com")]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.token, "abcd");
        assert_eq!(creds.email, "jan@example.com");
        assert_eq!(creds.signer().unwrap().user(), "jan@example.com");
    }

    #[test]
    fn missing_token_named() {
        let vars = env(&[(EMAIL_VAR, "jan@example.com")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn empty_email_counts_as_missing() {
        let vars = env(&[(TOKEN_VAR, "abcd"), (EMAIL_VAR, "")]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, IfirmaError::Credentials(ref m) if m.contains(EMAIL_VAR)));
    }

    #[test]
    fn bad_token_surfaces_on_signer() {
        let vars = env(&[(TOKEN_VAR, "zz"), (EMAIL_VAR, "jan@example.com")]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert!(matches!(creds.signer(), Err(IfirmaError::Token(_))));
    }

    #[test]
    fn debug_redacts_token() {
        let creds = Credentials {
            email: "jan@example.com".into(),
            token: "deadbeef".into(),
        };
        assert!(!format!("{creds:?}").contains("deadbeef"));
    }
}
