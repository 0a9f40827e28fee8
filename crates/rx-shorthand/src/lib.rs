//! # rx-shorthand
//!
//! A Rust library for parsing clinician medication shorthand notation.
//!
//! Clinicians write medication orders in a compact one-line form:
//!
//! ```text
//! Metf 1000 bd 30d
//! ```
//!
//! which reads as "drug code `metf`, strength 1000, frequency code `bd`,
//! for 30 days". This crate parses that grammar into a [`ShorthandOrder`].
//! It knows nothing about which drug codes or frequency codes exist —
//! resolving codes against a drug knowledge base is the job of the
//! consuming crate (see `rx-safety-engine`).
//!
//! ## Grammar
//!
//! | Token | Form | Example |
//! |-------|------|---------|
//! | drug code | alphanumeric word | `metf` |
//! | strength | integer | `1000` |
//! | frequency code | alphanumeric word | `bd` |
//! | duration | integer followed by `d` | `30d` |
//!
//! Tokens are whitespace-separated and the grammar is case-insensitive:
//! input is lowercased before parsing, so `"Metf 1000 BD 30d"` and
//! `"metf 1000 bd 30d"` parse identically.
//!
//! ## Usage
//!
//! ```rust
//! use rx_shorthand::parse;
//!
//! let order = parse("Metf 1000 bd 30d").unwrap();
//! assert_eq!(order.drug_code, "metf");
//! assert_eq!(order.strength, 1000);
//! assert_eq!(order.frequency_code, "bd");
//! assert_eq!(order.duration_days, 30);
//!
//! // Anything outside the grammar is rejected
//! assert!(parse("bad input").is_err());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod parser;

pub use ast::ShorthandOrder;
pub use error::{ShorthandError, ShorthandResult};
pub use parser::parse;
