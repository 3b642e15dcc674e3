use serde::Deserialize;

use crate::core::IfirmaError;

/// Result of an invoice creation call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteResponse {
    /// Identifier of the created invoice; 0 when nothing was created.
    #[serde(rename = "Identyfikator", default)]
    pub invoice_id: u64,
    /// Result code, 0 means success.
    #[serde(rename = "Kod", default)]
    pub code: i64,
    /// Human-readable message.
    #[serde(rename = "Informacja", default)]
    pub message: String,
}

#[derive(Deserialize)]
struct Envelope {
    response: RemoteResponse,
}

impl RemoteResponse {
    /// Decode the `{"response": {...}}` envelope.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::Response` if the body is not a valid envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, IfirmaError> {
        serde_json::from_slice::<Envelope>(body)
            .map(|env| env.response)
            .map_err(|e| IfirmaError::Response(e.to_string()))
    }

    /// The service created an invoice and returned its identifier.
    pub fn is_success(&self) -> bool {
        self.code == 0 && self.invoice_id > 0
    }
}
