use rust_decimal::Decimal;
use tracing::debug;

use super::flow::{InvoiceSubmitter, SubmissionOutcome};
use super::transport::Transport;
use crate::core::{IfirmaError, LineMode, RequestBuilder, SubmissionRequest};
use crate::settings::InvoiceConfig;

/// Select `invoice_id` from `config` and build its request.
///
/// # Errors
///
/// `IfirmaError::InvoiceNotFound` for an unknown identifier, or a builder
/// error for an invoice without positions.
pub fn build_configured_request(
    config: &InvoiceConfig,
    invoice_id: &str,
    net_price: Decimal,
    line_mode: LineMode,
) -> Result<SubmissionRequest, IfirmaError> {
    let invoice = config.find_invoice(invoice_id)?;
    debug!(invoice_id, lines = ?line_mode, "building request");
    RequestBuilder::new(invoice, &config.payment, net_price)
        .line_mode(line_mode)
        .build()
}

/// Issue one configured invoice: select, build, then submit.
///
/// Nothing is sent unless the invoice exists and its request builds.
pub fn issue_invoice<T: Transport>(
    config: &InvoiceConfig,
    invoice_id: &str,
    net_price: Decimal,
    line_mode: LineMode,
    submitter: &InvoiceSubmitter<T>,
) -> Result<SubmissionOutcome, IfirmaError> {
    let request = build_configured_request(config, invoice_id, net_price, line_mode)?;
    submitter.submit(&request)
}
