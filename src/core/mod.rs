//! Core invoice types, date resolution, request building and signing.
//!
//! Nothing in this module touches the network or the file system; it turns
//! a configured invoice into the exact bytes the remote service expects and
//! signs them.

mod auth;
mod dates;
mod error;
mod request;
mod types;

pub use auth::*;
pub use dates::*;
pub use error::*;
pub use request::*;
pub use types::*;
