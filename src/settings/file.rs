use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::core::{ConfiguredInvoice, IfirmaError, Payment};

/// Contents of the invoice configuration file.
///
/// ```toml
/// [payment]
/// bank = "12 3456 7890 1234 5678 9012 3456"
///
/// [[invoice]]
/// id = "consulting"
/// to = "ACME"
/// comment = "Thank you"
///
/// [[invoice.pos]]
/// name = "Consulting services"
/// quantity = 1
/// unit = "szt."
/// vat = 0.23
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceConfig {
    pub payment: Payment,
    #[serde(default, rename = "invoice")]
    pub invoices: Vec<ConfiguredInvoice>,
}

/// `$HOME/.config/ifirma.toml`, or `ifirma.toml` when `HOME` is unset.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("ifirma.toml"),
        None => PathBuf::from("ifirma.toml"),
    }
}

impl InvoiceConfig {
    /// Load and validate a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::Config` if the file is missing, malformed or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IfirmaError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading invoice configuration");
        let source = File::from(path).format(FileFormat::Toml).required(true);
        Self::from_source(source)
            .map_err(|e| IfirmaError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, IfirmaError> {
        Self::from_source(File::from_str(toml, FileFormat::Toml))
            .map_err(|e| IfirmaError::Config(e.to_string()))
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let parsed: Self = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        parsed.validate().map_err(config::ConfigError::Message)?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for invoice in &self.invoices {
            if !seen.insert(invoice.id.as_str()) {
                return Err(format!("duplicate invoice id: {}", invoice.id));
            }
            if invoice.positions.is_empty() {
                return Err(format!("invoice {} has no positions", invoice.id));
            }
            if let Some(pos) = invoice.positions.iter().find(|p| p.quantity == 0) {
                return Err(format!(
                    "invoice {}: position {:?} must have a positive quantity",
                    invoice.id, pos.name
                ));
            }
        }
        Ok(())
    }

    /// Look up an invoice by identifier.
    ///
    /// # Errors
    ///
    /// Returns `IfirmaError::InvoiceNotFound` naming the missing identifier.
    pub fn find_invoice(&self, id: &str) -> Result<&ConfiguredInvoice, IfirmaError> {
        self.invoices
            .iter()
            .find(|inv| inv.id == id)
            .ok_or_else(|| IfirmaError::InvoiceNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
[payment]
bank = "12 3456 7890"

[[invoice]]
id = "dev"
to = "ACME"
sold_at = "2024-05-20"

[[invoice.pos]]
name = "Software development"
quantity = 160
unit = "godz."
gtu = "GTU_12"
vat = 0.23

[[invoice.pos]]
name = "Hosting"
quantity = 1
unit = "szt."
vat = 0.08

[[invoice]]
id = "rent"
to = "Landlord"
comment = "May"

[[invoice.pos]]
name = "Office rent"
quantity = 1
unit = "szt."
vat = 0.23
"#;

    #[test]
    fn parses_sample() {
        let config = InvoiceConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.payment.bank, "12 3456 7890");
        assert_eq!(config.invoices.len(), 2);

        let dev = config.find_invoice("dev").unwrap();
        assert_eq!(dev.to, "ACME");
        assert_eq!(dev.issued_at(), "");
        assert_eq!(dev.sold_at(), "2024-05-20");
        assert_eq!(dev.positions.len(), 2);
        assert_eq!(dev.positions[0].quantity, 160);
        assert_eq!(dev.positions[0].gtu.as_deref(), Some("GTU_12"));
        assert_eq!(dev.positions[1].gtu, None);
        assert_eq!(dev.positions[1].vat, dec!(0.08));

        let rent = config.find_invoice("rent").unwrap();
        assert_eq!(rent.comment.as_deref(), Some("May"));
    }

    #[test]
    fn unknown_invoice_is_named() {
        let config = InvoiceConfig::from_toml_str(SAMPLE).unwrap();
        let err = config.find_invoice("missing").unwrap_err();
        assert!(matches!(err, IfirmaError::InvoiceNotFound(ref id) if id == "missing"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let toml = r#"
[payment]
bank = "1"

[[invoice]]
id = "a"
to = "X"
[[invoice.pos]]
name = "n"
quantity = 1
unit = "u"
vat = 0.23

[[invoice]]
id = "a"
to = "Y"
[[invoice.pos]]
name = "n"
quantity = 1
unit = "u"
vat = 0.23
"#;
        let err = InvoiceConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate invoice id: a"));
    }

    #[test]
    fn zero_quantity_rejected() {
        let toml = r#"
[payment]
bank = "1"

[[invoice]]
id = "a"
to = "X"
[[invoice.pos]]
name = "n"
quantity = 0
unit = "u"
vat = 0.23
"#;
        assert!(matches!(
            InvoiceConfig::from_toml_str(toml),
            Err(IfirmaError::Config(_))
        ));
    }

    #[test]
    fn missing_payment_rejected() {
        assert!(InvoiceConfig::from_toml_str("[[invoice]]\nid = \"a\"\nto = \"b\"\n").is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = InvoiceConfig::load("/nonexistent/ifirma.toml").unwrap_err();
        assert!(matches!(err, IfirmaError::Config(_)));
    }
}
