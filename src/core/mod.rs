//! Credit transfer transaction model, validation and document building.
//!
//! A [`Transaction`] is filled through validating setters, checked with
//! [`Transaction::is_complete`] or [`validate_transaction`], and mapped to a
//! `CdtTrfTxInf` [`Node`] by [`build_transaction`] or a [`DocumentBuilder`].

mod builder;
pub mod currencies;
mod document;
mod error;
mod iban;
mod types;
mod validation;

pub use builder::*;
pub use document::*;
pub use error::*;
pub use iban::*;
pub use types::*;
pub use validation::*;
