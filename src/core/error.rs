use thiserror::Error;

/// Errors that can occur while preparing, signing or submitting an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IfirmaError {
    /// Configuration file could not be read, parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested invoice identifier is not defined in the configuration.
    #[error("invoice not found in config: {0}")]
    InvoiceNotFound(String),

    /// A required credential (API token or account email) is missing.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// The API token is not valid hex.
    #[error("cannot decode API token: {0}")]
    Token(String),

    /// The configured invoice cannot be turned into a request.
    #[error("builder error: {0}")]
    Builder(String),

    /// The request could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Network or HTTP client error.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with a body that is not a valid response.
    #[error("failed to read response: {0}")]
    Response(String),

    /// Local file system error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IfirmaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
