use thiserror::Error;

/// Errors raised while populating, building or serializing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// A text field exceeds its maximum character count.
    #[error("{field} is too long: {actual} characters, at most {max} allowed")]
    FieldTooLong {
        /// Name of the rejected field (e.g. "creditor_name").
        field: &'static str,
        /// Maximum number of characters accepted.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// The IBAN failed the mod-97 checksum.
    #[error("invalid account number: {0}")]
    InvalidAccountNumber(String),

    /// Amount text could not be read as a decimal number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Strict build refused a transaction with missing required fields.
    #[error("incomplete transaction: {0}")]
    Incomplete(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A single advisory finding from [`validate_transaction`](super::validate_transaction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Transaction field the finding refers to (e.g. "iban").
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Short rule tag (e.g. "IBAN-LEN"), if the finding belongs to one.
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "[{rule}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
