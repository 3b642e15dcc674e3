use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::endpoints::{Endpoints, document_path};
use super::response::RemoteResponse;
use super::transport::Transport;
use crate::core::{IfirmaError, Signer, SubmissionRequest};

/// Serialized and signed creation call, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub url: String,
    /// Exact body bytes; the signature covers these.
    pub body: Vec<u8>,
    pub authorization: String,
}

impl PreparedSubmission {
    /// Serialize `request` and sign it for the creation endpoint.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::Serialization` if the request cannot be encoded.
    pub fn new(
        request: &SubmissionRequest,
        signer: &Signer,
        endpoints: &Endpoints,
    ) -> Result<Self, IfirmaError> {
        let url = endpoints.create_url();
        let body = request.to_json_bytes()?;
        let authorization = signer.authorization(&url, &body);
        Ok(Self {
            url,
            body,
            authorization,
        })
    }
}

/// What happened to the PDF of an accepted invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Written to this path.
    Saved(PathBuf),
    /// Not saved; the invoice still exists remotely.
    Failed(String),
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The service created the invoice.
    Accepted {
        invoice_id: u64,
        code: i64,
        message: String,
        document: DocumentOutcome,
    },
    /// The service refused the request. Not an error of this program.
    Rejected { code: i64, message: String },
}

/// Submits one invoice and fetches its PDF.
#[derive(Debug)]
pub struct InvoiceSubmitter<T> {
    transport: T,
    signer: Signer,
    endpoints: Endpoints,
    output_dir: PathBuf,
}

impl<T: Transport> InvoiceSubmitter<T> {
    pub fn new(transport: T, signer: Signer) -> Self {
        Self {
            transport,
            signer,
            endpoints: Endpoints::default(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Directory the PDF is written to (default: working directory).
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Serialize and sign `request` without sending it.
    pub fn prepare(&self, request: &SubmissionRequest) -> Result<PreparedSubmission, IfirmaError> {
        PreparedSubmission::new(request, &self.signer, &self.endpoints)
    }

    /// Create the invoice remotely and, on success, download its PDF.
    ///
    /// # Errors
    ///
    /// Serialization, transport and response decoding failures of the
    /// creation call. A rejection by the service is a
    /// [`SubmissionOutcome::Rejected`], and download problems are reported
    /// through [`DocumentOutcome::Failed`].
    pub fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionOutcome, IfirmaError> {
        let prepared = self.prepare(request)?;
        debug!(url = %prepared.url, bytes = prepared.body.len(), "request signed");

        let http = self
            .transport
            .post_json(&prepared.url, &prepared.authorization, prepared.body)?;
        debug!(status = http.status, "invoice submitted");

        let response = RemoteResponse::from_slice(&http.body)?;
        if !response.is_success() {
            warn!(code = response.code, message = %response.message, "invoice rejected");
            return Ok(SubmissionOutcome::Rejected {
                code: response.code,
                message: response.message,
            });
        }

        info!(invoice_id = response.invoice_id, "invoice created");
        let document = self.download(response.invoice_id);
        Ok(SubmissionOutcome::Accepted {
            invoice_id: response.invoice_id,
            code: response.code,
            message: response.message,
            document,
        })
    }

    /// Fetch the PDF of an existing invoice into the output directory.
    pub fn download(&self, invoice_id: u64) -> DocumentOutcome {
        let url = self.endpoints.download_url(invoice_id);
        info!(invoice_id, "downloading invoice PDF");
        let authorization = self.signer.authorization(&url, &[]);

        let http = match self.transport.get_pdf(&url, &authorization) {
            Ok(http) => http,
            Err(e) => {
                warn!(invoice_id, error = %e, "failed to download PDF");
                return DocumentOutcome::Failed(e.to_string());
            }
        };
        if !http.is_success() {
            warn!(invoice_id, status = http.status, "PDF download refused");
            return DocumentOutcome::Failed(format!("HTTP {}", http.status));
        }

        let path = document_path(&self.output_dir, invoice_id);
        match write_private(&path, &http.body) {
            Ok(()) => {
                info!(path = %path.display(), "PDF saved");
                DocumentOutcome::Saved(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write PDF");
                DocumentOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Write `contents` to `path`, readable by the owner only.
fn write_private(path: &Path, contents: &[u8]) -> Result<(), IfirmaError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    Ok(())
}
