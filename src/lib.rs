//! # ifaktura
//!
//! Issue domestic sales invoices through the iFirma HTTP API.
//!
//! A configured invoice is turned into a byte-exact JSON request, signed with
//! the account's HMAC-SHA1 API token, submitted, and on success the rendered
//! PDF is downloaded next to the caller.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point
//! in the domain model.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ifaktura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = ConfiguredInvoice {
//!     id: "consulting".into(),
//!     to: "ACME".into(),
//!     issued_at: None,
//!     sold_at: None,
//!     positions: vec![Position::new("Consulting", 1, "szt.", dec!(0.23))],
//!     comment: None,
//! };
//! let payment = Payment { bank: "12 3456 7890".into() };
//!
//! let request = RequestBuilder::new(&invoice, &payment, dec!(1000))
//!     .today(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(request.issued_at, "2024-02-29");
//!
//! let signer = Signer::new("jan@example.com", "00112233445566778899").unwrap();
//! let body = request.to_json_bytes().unwrap();
//! let header = signer.authorization("https://www.ifirma.pl/iapi/fakturakraj.json", &body);
//! assert!(header.starts_with("IAPIS user=jan@example.com, hmac-sha1="));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Invoice types, date resolution, request building, signing |
//! | `settings` | TOML invoice configuration and credentials from the environment |
//! | `client` | Blocking HTTP transport, submission and PDF download |
//! | `cli` | The `ifaktura` binary |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
