//! # Simple blocking client for the PowerDNS Authoritative Server HTTP API.
//!
//! Implements an easy-to-use client for the [PowerDNS HTTP API]: server and
//! zone inspection, zone creation and deletion, and rrset edits, spoken over
//! the JSON REST interface with `X-API-Key` authentication.
//!
//! PowerDNS reports most failures as JSON bodies. Any response body that
//! decodes as JSON is returned as ordinary data, whatever the status code,
//! so callers inspect the returned value for an `error` field instead of
//! matching on an error variant. Only a response whose body is not JSON at
//! all becomes a status error.
//!
//! ## Examples
//!
//! ```no_run
//! use pdns_client::Client;
//! use pdns_client::record::Type;
//!
//! let client = Client::builder()
//!     .api_key("<APIKEY>")
//!     .build()
//!     .unwrap();
//!
//! let zone = "example.com.";
//! client
//!     .create_master_zone("localhost", zone, &["ns1.example.com."])
//!     .unwrap();
//! client
//!     .create_record("localhost", zone, Type::A, "192.0.2.1", "", None)
//!     .unwrap();
//! client
//!     .create_record("localhost", zone, Type::Aaaa, "::1", "www", None)
//!     .unwrap();
//! ```
//!
//! [PowerDNS HTTP API]: https://doc.powerdns.com/authoritative/http-api/

mod client;
mod errors;
pub mod record;
pub mod zone;

pub use client::*;
pub use errors::*;
