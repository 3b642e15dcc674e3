use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::dates::{resolve_date, resolve_date_today};
use super::error::IfirmaError;
use super::types::{ConfiguredInvoice, Payment, Position};

/// VAT rate put on every request line, regardless of the configured
/// per-position rate.
pub const FIXED_VAT_RATE: Decimal = dec!(0.23);

/// GTU value meaning "no classification applies". The remote service
/// rejects an empty GTU field.
pub const GTU_NONE: &str = "BRAK";

/// Basis the invoice amounts are computed from (`LiczOd`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueBasis {
    /// `NET`: prices are net, VAT is added.
    #[default]
    #[serde(rename = "NET")]
    Net,
}

/// How the sale date is printed (`FormatDatySprzedazy`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleDateFormat {
    /// `DZN`: full day.
    #[default]
    #[serde(rename = "DZN")]
    Daily,
}

/// Payment method (`SposobZaplaty`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// `PRZ`: bank transfer.
    #[default]
    #[serde(rename = "PRZ")]
    Transfer,
}

/// Recipient signature confirmation (`RodzajPodpisuOdbiorcy`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureType {
    /// `BPO`: issued without the recipient's signature.
    #[default]
    #[serde(rename = "BPO")]
    WithoutRecipientSignature,
}

/// How the line VAT rate is expressed (`TypStawkiVat`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatType {
    /// `PRC`: percentage rate applied to a net price.
    #[default]
    #[serde(rename = "PRC")]
    Percent,
}

/// Body of the domestic invoice creation call.
///
/// Field order is the order the remote schema documents. The serialized
/// bytes are both the HTTP body and the signed message, so the layout must
/// not change between serialization and sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "Zaplacono", with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    #[serde(rename = "ZaplaconoNaDokumencie", with = "rust_decimal::serde::float")]
    pub paid_on_document: Decimal,
    #[serde(rename = "LiczOd")]
    pub issue_basis: IssueBasis,
    #[serde(rename = "NumerKontaBankowego")]
    pub bank_account: String,
    #[serde(rename = "DataWystawienia")]
    pub issued_at: String,
    #[serde(rename = "DataSprzedazy")]
    pub sold_at: String,
    #[serde(rename = "FormatDatySprzedazy")]
    pub sale_date_format: SaleDateFormat,
    #[serde(rename = "SposobZaplaty")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "RodzajPodpisuOdbiorcy")]
    pub signature_type: SignatureType,
    #[serde(rename = "IdentyfikatorKontrahenta")]
    pub contractor_id: String,
    #[serde(rename = "Uwagi")]
    pub comment: String,
    #[serde(rename = "Pozycje")]
    pub lines: Vec<RequestLine>,
}

/// One line of a [`SubmissionRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLine {
    #[serde(rename = "StawkaVat", with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    #[serde(rename = "Ilosc")]
    pub quantity: u32,
    #[serde(rename = "CenaJednostkowa", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "NazwaPelna")]
    pub name: String,
    #[serde(rename = "Jednostka")]
    pub unit: String,
    #[serde(rename = "TypStawkiVat")]
    pub vat_type: VatType,
    #[serde(rename = "GTU")]
    pub gtu: String,
}

impl SubmissionRequest {
    /// Serialize to the exact bytes that are signed and sent.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, IfirmaError> {
        serde_json::to_vec(self).map_err(|e| IfirmaError::Serialization(e.to_string()))
    }
}

/// Which configured positions become request lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Only the first position is invoiced.
    #[default]
    FirstPosition,
    /// Every position becomes a line, in configured order.
    AllPositions,
}

/// Strip every space from a bank account number. No other characters are
/// touched.
pub fn normalize_bank_account(account: &str) -> String {
    account.replace(' ', "")
}

/// GTU code to send for a position.
pub fn gtu_or_none(gtu: Option<&str>) -> String {
    match gtu {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => GTU_NONE.to_string(),
    }
}

/// Builder turning a [`ConfiguredInvoice`] and a net unit price into a
/// [`SubmissionRequest`].
///
/// ```
/// use ifaktura::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = ConfiguredInvoice {
///     id: "consulting".into(),
///     to: "ACME".into(),
///     issued_at: Some("2024-05-31".into()),
///     sold_at: Some("2024-05-31".into()),
///     positions: vec![Position::new("Consulting", 1, "szt.", dec!(0.23))],
///     comment: None,
/// };
/// let payment = Payment { bank: "11 2222 3333".into() };
///
/// let request = RequestBuilder::new(&invoice, &payment, dec!(1000)).build().unwrap();
/// assert_eq!(request.bank_account, "1122223333");
/// assert_eq!(request.lines[0].gtu, GTU_NONE);
/// ```
pub struct RequestBuilder<'a> {
    invoice: &'a ConfiguredInvoice,
    payment: &'a Payment,
    net_price: Decimal,
    line_mode: LineMode,
    today: Option<NaiveDate>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(invoice: &'a ConfiguredInvoice, payment: &'a Payment, net_price: Decimal) -> Self {
        Self {
            invoice,
            payment,
            net_price,
            line_mode: LineMode::default(),
            today: None,
        }
    }

    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Pin the date empty issue/sale dates are resolved against.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn build(self) -> Result<SubmissionRequest, IfirmaError> {
        if self.invoice.positions.is_empty() {
            return Err(IfirmaError::Builder(format!(
                "invoice {} has no positions",
                self.invoice.id
            )));
        }

        let positions = match self.line_mode {
            LineMode::FirstPosition => &self.invoice.positions[..1],
            LineMode::AllPositions => &self.invoice.positions[..],
        };
        let lines = positions
            .iter()
            .map(|pos| self.line(pos))
            .collect::<Vec<_>>();

        Ok(SubmissionRequest {
            paid: Decimal::ZERO,
            paid_on_document: Decimal::ZERO,
            issue_basis: IssueBasis::Net,
            bank_account: normalize_bank_account(&self.payment.bank),
            issued_at: self.resolve(self.invoice.issued_at()),
            sold_at: self.resolve(self.invoice.sold_at()),
            sale_date_format: SaleDateFormat::Daily,
            payment_method: PaymentMethod::Transfer,
            signature_type: SignatureType::WithoutRecipientSignature,
            contractor_id: self.invoice.to.clone(),
            comment: self.invoice.comment.clone().unwrap_or_default(),
            lines,
        })
    }

    fn line(&self, pos: &Position) -> RequestLine {
        RequestLine {
            vat_rate: FIXED_VAT_RATE,
            quantity: pos.quantity,
            unit_price: self.net_price,
            name: pos.name.clone(),
            unit: pos.unit.clone(),
            vat_type: VatType::Percent,
            gtu: gtu_or_none(pos.gtu.as_deref()),
        }
    }

    fn resolve(&self, date: &str) -> String {
        match self.today {
            Some(today) => resolve_date(date, today),
            None => resolve_date_today(date),
        }
    }
}
