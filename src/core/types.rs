use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SepaError;
use super::iban::verify_account_checksum;
use super::validation::{
    check_length, decode_text, normalize_amount, parse_amount, strip_whitespace,
};

/// Currency reported when none was set.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Maximum characters of the creditor name (`Cdtr/Nm`).
pub const MAX_CREDITOR_NAME_LENGTH: usize = 70;

/// Maximum characters of the unstructured remittance note (`RmtInf/Ustrd`).
pub const MAX_REMITTANCE_INFO_LENGTH: usize = 140;

/// One instructed SEPA credit transfer (`CdtTrfTxInf`).
///
/// Fields are private and written only through validating setters, so a
/// value of this type always satisfies the length and checksum rules. Setters
/// return `&mut Self` (or `Result<&mut Self, _>` when they can reject) to
/// allow chaining:
///
/// ```
/// use sepa_ct::Transaction;
/// use rust_decimal::Decimal;
///
/// let mut tx = Transaction::new();
/// tx.set_instruction_id("I1")
///     .set_end_to_end_id("E1")
///     .set_instructed_amount(Decimal::new(1000, 2))
///     .set_bic("WEST GB 2L")
///     .set_iban("GB82 WEST 1234 5698 7654 32")?
///     .set_creditor_name("Jane Doe")?;
///
/// assert!(tx.is_complete());
/// assert_eq!(tx.currency(), "EUR");
/// # Ok::<(), sepa_ct::SepaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    instruction_id: String,
    end_to_end_id: String,
    instructed_amount: String,
    currency: String,
    bic: String,
    iban: String,
    remittance_info: String,
    creditor_name: String,
    creditor_country: String,
    institution_name: String,
    institution_address: String,
    clearance_code: String,
    uses_beneficiary_code: bool,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            instruction_id: String::new(),
            end_to_end_id: String::new(),
            instructed_amount: normalize_amount(Decimal::ZERO),
            currency: String::new(),
            bic: String::new(),
            iban: String::new(),
            remittance_info: String::new(),
            creditor_name: String::new(),
            creditor_country: String::new(),
            institution_name: String::new(),
            institution_address: String::new(),
            clearance_code: String::new(),
            uses_beneficiary_code: true,
        }
    }
}

impl Transaction {
    /// Create an empty transaction using the beneficiary-code scheme.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Setters ─────────────────────────────────────────────────────────

    pub fn set_instruction_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.instruction_id = id.into();
        self
    }

    pub fn set_end_to_end_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.end_to_end_id = id.into();
        self
    }

    /// Store the amount as two-decimal fixed-point text.
    pub fn set_instructed_amount(&mut self, amount: Decimal) -> &mut Self {
        self.instructed_amount = normalize_amount(amount);
        self
    }

    /// Parse amount text and store it; see [`parse_amount`].
    pub fn set_instructed_amount_str(&mut self, amount: &str) -> Result<&mut Self, SepaError> {
        let value = parse_amount(amount).inspect_err(|_| {
            tracing::debug!(field = "instructed_amount", value = amount, "rejected amount text");
        })?;
        Ok(self.set_instructed_amount(value))
    }

    /// Store the BIC with all whitespace removed. The format is not checked.
    pub fn set_bic(&mut self, bic: &str) -> &mut Self {
        self.bic = strip_whitespace(bic);
        self
    }

    /// Store the IBAN with all whitespace removed after verifying its checksum.
    ///
    /// The checksum ignores case, but the IBAN is stored and written to the
    /// document in the case it was given; pass uppercase to get a
    /// schema-valid document. On failure the previous IBAN is kept.
    pub fn set_iban(&mut self, iban: &str) -> Result<&mut Self, SepaError> {
        let iban = strip_whitespace(iban);
        if !verify_account_checksum(&iban) {
            tracing::debug!(
                field = "iban",
                instruction_id = %self.instruction_id,
                "rejected IBAN with bad checksum"
            );
            return Err(SepaError::InvalidAccountNumber(iban));
        }
        self.iban = iban;
        Ok(self)
    }

    /// Store the decoded creditor name, at most 70 characters.
    pub fn set_creditor_name(&mut self, name: &str) -> Result<&mut Self, SepaError> {
        self.creditor_name = self.checked_text("creditor_name", name, MAX_CREDITOR_NAME_LENGTH)?;
        Ok(self)
    }

    /// Store the decoded remittance note, at most 140 characters.
    /// An empty note removes `RmtInf` from the built document.
    pub fn set_remittance_info(&mut self, info: &str) -> Result<&mut Self, SepaError> {
        self.remittance_info =
            self.checked_text("remittance_info", info, MAX_REMITTANCE_INFO_LENGTH)?;
        Ok(self)
    }

    pub fn set_currency(&mut self, currency: &str) -> &mut Self {
        self.currency = currency.to_uppercase();
        self
    }

    /// Select the creditor identification scheme; see [`CreditorScheme`].
    pub fn set_uses_beneficiary_code(&mut self, uses: bool) -> &mut Self {
        self.uses_beneficiary_code = uses;
        self
    }

    pub fn set_creditor_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.creditor_country = country.into();
        self
    }

    pub fn set_clearance_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.clearance_code = code.into();
        self
    }

    pub fn set_institution_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.institution_name = name.into();
        self
    }

    /// Institution address, written as the agent's country (`PstlAdr/Ctry`).
    pub fn set_institution_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.institution_address = address.into();
        self
    }

    fn checked_text(
        &self,
        field: &'static str,
        text: &str,
        max: usize,
    ) -> Result<String, SepaError> {
        self.within_limit(field, decode_text(text), max)
    }

    /// Length check for text that is already decoded.
    fn within_limit(
        &self,
        field: &'static str,
        decoded: String,
        max: usize,
    ) -> Result<String, SepaError> {
        if !check_length(&decoded, max) {
            let actual = decoded.chars().count();
            tracing::debug!(
                field,
                max,
                actual,
                instruction_id = %self.instruction_id,
                "rejected over-long text"
            );
            return Err(SepaError::FieldTooLong { field, max, actual });
        }
        Ok(decoded)
    }

    // ── Getters ─────────────────────────────────────────────────────────

    pub fn instruction_id(&self) -> &str {
        &self.instruction_id
    }

    pub fn end_to_end_id(&self) -> &str {
        &self.end_to_end_id
    }

    /// Two-decimal fixed-point text, `"0.00"` until an amount is set.
    pub fn instructed_amount(&self) -> &str {
        &self.instructed_amount
    }

    /// Uppercase currency code, or [`DEFAULT_CURRENCY`] when none was set.
    ///
    /// The default is applied on read only; it is never stored.
    pub fn currency(&self) -> &str {
        if self.currency.is_empty() {
            DEFAULT_CURRENCY
        } else {
            &self.currency
        }
    }

    pub fn bic(&self) -> &str {
        &self.bic
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn remittance_info(&self) -> &str {
        &self.remittance_info
    }

    pub fn creditor_name(&self) -> &str {
        &self.creditor_name
    }

    pub fn creditor_country(&self) -> &str {
        &self.creditor_country
    }

    pub fn institution_name(&self) -> &str {
        &self.institution_name
    }

    pub fn institution_address(&self) -> &str {
        &self.institution_address
    }

    pub fn clearance_code(&self) -> &str {
        &self.clearance_code
    }

    pub fn uses_beneficiary_code(&self) -> bool {
        self.uses_beneficiary_code
    }

    // ── Derived ─────────────────────────────────────────────────────────

    /// Whether BIC, IBAN and creditor name are all set.
    ///
    /// Advisory: nothing refuses an incomplete transaction unless the caller
    /// asks for a strict build.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("bic", &self.bic),
            ("iban", &self.iban),
            ("creditor_name", &self.creditor_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// The creditor identification scheme selected by
    /// [`set_uses_beneficiary_code`](Self::set_uses_beneficiary_code), with
    /// the fields it reads.
    pub fn creditor_scheme(&self) -> CreditorScheme<'_> {
        if self.uses_beneficiary_code {
            CreditorScheme::CodeBased {
                customer_code: &self.iban,
            }
        } else {
            CreditorScheme::Full {
                agent: CreditorAgent {
                    clearance_code: &self.clearance_code,
                    name: &self.institution_name,
                    country: &self.institution_address,
                },
                name: &self.creditor_name,
                country: &self.creditor_country,
                account: &self.iban,
            }
        }
    }
}

/// How the creditor is identified in the built document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditorScheme<'a> {
    /// The creditor is identified by a customer code carried in the
    /// organisation-id field (`Cdtr/Id/OrgId/Othr`, scheme `CUST`). There is
    /// no agent and no separate account.
    CodeBased { customer_code: &'a str },
    /// The creditor is identified by name and country, its bank by clearing
    /// member id, and the account is referenced separately (`CdtrAcct`).
    Full {
        agent: CreditorAgent<'a>,
        name: &'a str,
        country: &'a str,
        account: &'a str,
    },
}

/// Creditor's bank in the full scheme (`CdtrAgt/FinInstnId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditorAgent<'a> {
    pub clearance_code: &'a str,
    pub name: &'a str,
    pub country: &'a str,
}

/// Plain serialized form of a [`Transaction`].
///
/// Deserializing replays every field through the validating setters, so a
/// record that breaks a rule fails to load instead of producing an invalid
/// transaction. Text fields hold decoded text and are only length-checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub instruction_id: String,
    pub end_to_end_id: String,
    pub instructed_amount: String,
    pub currency: String,
    pub bic: String,
    pub iban: String,
    pub remittance_info: String,
    pub creditor_name: String,
    pub creditor_country: String,
    pub institution_name: String,
    pub institution_address: String,
    pub clearance_code: String,
    pub uses_beneficiary_code: Option<bool>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = SepaError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let mut tx = Transaction::new();
        tx.set_instruction_id(record.instruction_id)
            .set_end_to_end_id(record.end_to_end_id)
            .set_currency(&record.currency)
            .set_bic(&record.bic)
            .set_creditor_country(record.creditor_country)
            .set_institution_name(record.institution_name)
            .set_institution_address(record.institution_address)
            .set_clearance_code(record.clearance_code)
            .set_uses_beneficiary_code(record.uses_beneficiary_code.unwrap_or(true));
        if !record.instructed_amount.is_empty() {
            tx.set_instructed_amount_str(&record.instructed_amount)?;
        }
        if !record.iban.is_empty() {
            tx.set_iban(&record.iban)?;
        }
        // stored text is already decoded; decoding again would rewrite
        // literal escape sequences
        tx.creditor_name =
            tx.within_limit("creditor_name", record.creditor_name, MAX_CREDITOR_NAME_LENGTH)?;
        tx.remittance_info = tx.within_limit(
            "remittance_info",
            record.remittance_info,
            MAX_REMITTANCE_INFO_LENGTH,
        )?;
        Ok(tx)
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(tx: Transaction) -> Self {
        Self {
            instruction_id: tx.instruction_id,
            end_to_end_id: tx.end_to_end_id,
            instructed_amount: tx.instructed_amount,
            currency: tx.currency,
            bic: tx.bic,
            iban: tx.iban,
            remittance_info: tx.remittance_info,
            creditor_name: tx.creditor_name,
            creditor_country: tx.creditor_country,
            institution_name: tx.institution_name,
            institution_address: tx.institution_address,
            clearance_code: tx.clearance_code,
            uses_beneficiary_code: Some(tx.uses_beneficiary_code),
        }
    }
}
