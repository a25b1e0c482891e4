//! # avpr2rest
//!
//! Convert [Apache Avro](https://avro.apache.org/) protocol (`.avpr`) files
//! into reStructuredText pages for a Sphinx-style documentation build.
//!
//! ## Output
//!
//! Each protocol becomes one page: the protocol name as a title, its doc,
//! then one directive per declared type:
//!
//! ```rst
//! Mail
//! ****
//!
//! .. avro:record:: Message
//!
//!   :field to:
//!   :type to: string
//!   :field cc:
//!   :type cc: null|array<string>
//!
//! .. avro:enum:: Priority
//!
//!   :symbols: LOW|HIGH
//! .. avro:fixed:: MD5
//!
//!   :size: 16
//! ```
//!
//! Markdown `doc` strings are converted to reST by `pandoc`, which must be
//! on `PATH` when docs are present.
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use avpr2rest::avro::Protocol;
//! use avpr2rest::converter::render_protocol;
//! use avpr2rest::error::ConvertError;
//!
//! let protocol: Protocol = r#"{
//!     "protocol": "Mail",
//!     "types": [{"type": "fixed", "name": "MD5", "size": 16}]
//! }"#
//! .parse()
//! .unwrap();
//!
//! let no_docs = |_: &str| -> Result<String, ConvertError> { Ok(String::new()) };
//! let rest = render_protocol(&protocol, &no_docs).unwrap();
//! assert!(rest.contains(".. avro:fixed:: MD5"));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! avpr2rest mail.avpr billing.avpr docs/protocols
//! ```
//!
//! ## Crate Layout
//!
//! - [`avro`]: Protocol data model (`Protocol`, `TypeDefinition`, `TypeExpr`)
//! - [`common`]: Output naming and text helpers
//! - [`converter`]: Rendering and the file conversion loop
//! - [`error`]: Error types
//!
//! The CLI binary is enabled with the `cli` feature (on by default).
pub mod avro;
pub mod common;
pub mod converter;
pub mod error;

pub use error::{Error, Result};
