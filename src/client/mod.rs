//! HTTP access to the remote invoicing service.
//!
//! Submits a signed invoice request and, when the service accepts it,
//! downloads the rendered PDF.
//!
//! # Example
//!
//! ```ignore
//! use ifaktura::client::*;
//!
//! let transport = HttpTransport::new(Duration::from_secs(30))?;
//! let submitter = InvoiceSubmitter::new(transport, signer).output_dir("invoices");
//! match submitter.submit(&request)? {
//!     SubmissionOutcome::Accepted { invoice_id, .. } => println!("created {invoice_id}"),
//!     SubmissionOutcome::Rejected { code, message } => println!("{message} ({code})"),
//! }
//! ```

mod endpoints;
mod flow;
#[cfg(feature = "settings")]
mod issue;
mod response;
mod transport;

pub use endpoints::{DEFAULT_BASE_URL, Endpoints, document_file_name};
pub use flow::{DocumentOutcome, InvoiceSubmitter, PreparedSubmission, SubmissionOutcome};
#[cfg(feature = "settings")]
pub use issue::{build_configured_request, issue_invoice};
pub use response::RemoteResponse;
pub use transport::{DEFAULT_TIMEOUT, HttpResponse, HttpTransport, Transport};
