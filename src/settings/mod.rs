//! Invoice configuration file and account credentials.
//!
//! # Example
//!
//! ```no_run
//! use ifaktura::settings::*;
//!
//! let config = InvoiceConfig::load(default_config_path())?;
//! let invoice = config.find_invoice("consulting")?;
//! let credentials = Credentials::from_env()?;
//! # Ok::<(), ifaktura::core::IfirmaError>(())
//! ```

mod credentials;
mod file;

pub use credentials::{Credentials, EMAIL_VAR, TOKEN_VAR};
pub use file::{InvoiceConfig, default_config_path};
