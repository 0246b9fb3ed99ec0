//! Registrar domain module.
//!
//! Everything that knows about the Namecheap wire format lives here:
//!
//! - `client.rs` - credential validation, request URL building and the HTTP call
//! - `envelope.rs` - the raw `ApiResponse` XML envelope and its decoder
//! - `mapping.rs` - pure normalization of raw records into [`DomainResult`]s
//! - `types.rs` - credentials and normalized result types
//! - `error.rs` - registrar error taxonomy

mod client;
mod envelope;
mod error;
mod mapping;
mod types;

pub use client::{DEFAULT_ENDPOINT, MAX_DOMAINS_PER_CHECK, NamecheapClient, REQUEST_TIMEOUT};
pub use envelope::{ApiResponse, CommandResponse, DomainCheckRecord, ErrorEntry, Errors};
pub use error::{RegistrarError, RegistrarResult};
pub use mapping::{map_results, parse_decimal};
pub use types::{Credentials, DomainResult};
