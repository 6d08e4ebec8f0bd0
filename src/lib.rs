//! # sepa-ct
//!
//! SEPA credit transfer transactions: field validation, IBAN checksums and the
//! ISO 20022 pain.001 `CdtTrfTxInf` document tree.
//!
//! Amounts are [`rust_decimal::Decimal`] and are stored as two-decimal
//! fixed-point text, never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use sepa_ct::core::*;
//! use rust_decimal::Decimal;
//!
//! let mut tx = Transaction::new();
//! tx.set_instruction_id("I1")
//!     .set_end_to_end_id("E1")
//!     .set_instructed_amount(Decimal::new(10, 0))
//!     .set_currency("eur")
//!     .set_bic("WESTGB2L")
//!     .set_iban("GB82 WEST 1234 5698 7654 32")?
//!     .set_creditor_name("Jane Doe")?;
//!
//! assert!(tx.is_complete());
//! assert!(validate_transaction(&tx).is_empty());
//!
//! let doc = DocumentBuilder::new().strict(true).build(&tx)?;
//! let amount = doc.find_path(&["Amt", "InstdAmt"]).unwrap();
//! assert_eq!(amount.text(), "10.00");
//! assert_eq!(amount.attribute("Ccy"), Some("EUR"));
//! # Ok::<(), SepaError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Transaction model, validation, document tree builder |
//! | `xml` | Write and read document trees as XML |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
