use std::path::{Path, PathBuf};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.ifirma.pl/iapi";

/// URLs of the domestic invoice resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Invoice creation endpoint.
    pub fn create_url(&self) -> String {
        format!("{}/fakturakraj.json", self.base_url)
    }

    /// PDF of a created invoice.
    pub fn download_url(&self, invoice_id: u64) -> String {
        format!("{}/fakturakraj/{invoice_id}.pdf.single", self.base_url)
    }
}

/// Local file name the PDF of `invoice_id` is saved under.
pub fn document_file_name(invoice_id: u64) -> String {
    format!("fv-{invoice_id}.pdf")
}

pub(crate) fn document_path(dir: &Path, invoice_id: u64) -> PathBuf {
    dir.join(document_file_name(invoice_id))
}
