use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank details printed on every issued invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Bank account number as written by the user, spaces allowed.
    pub bank: String,
}

/// An invoice definition authored by the user.
///
/// Loaded once at startup and selected by [`ConfiguredInvoice::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredInvoice {
    /// Identifier, unique within one configuration.
    pub id: String,
    /// Recipient (contractor) identifier known to the remote service.
    pub to: String,
    /// Issue date `YYYY-MM-DD`; empty or absent means "resolve".
    #[serde(default)]
    pub issued_at: Option<String>,
    /// Sale date `YYYY-MM-DD`; empty or absent means "resolve".
    #[serde(default)]
    pub sold_at: Option<String>,
    /// Ordered line positions.
    #[serde(default, rename = "pos")]
    pub positions: Vec<Position>,
    /// Free-text remark printed on the invoice.
    #[serde(default)]
    pub comment: Option<String>,
}

/// A single line position of a configured invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Full item name.
    pub name: String,
    /// Invoiced quantity, must be positive.
    pub quantity: u32,
    /// Unit label (e.g. "szt.", "godz.").
    pub unit: String,
    /// GTU classification code; empty when not applicable.
    #[serde(default)]
    pub gtu: Option<String>,
    /// VAT rate as a fraction (0.23 for 23%).
    pub vat: Decimal,
}

impl ConfiguredInvoice {
    /// Configured issue date, empty when not set.
    pub fn issued_at(&self) -> &str {
        self.issued_at.as_deref().unwrap_or_default()
    }

    /// Configured sale date, empty when not set.
    pub fn sold_at(&self) -> &str {
        self.sold_at.as_deref().unwrap_or_default()
    }
}

impl Position {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit: impl Into<String>,
        vat: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            gtu: None,
            vat,
        }
    }

    pub fn with_gtu(mut self, gtu: impl Into<String>) -> Self {
        self.gtu = Some(gtu.into());
        self
    }
}
