use super::document::Node;
use super::error::SepaError;
use super::types::{CreditorAgent, CreditorScheme, Transaction};

/// Scheme code tagging the customer code in the beneficiary-code scheme.
pub const CUSTOMER_SCHEME_CODE: &str = "CUST";

/// Proprietary creditor reference type attached to every remittance block.
pub const PROPRIETARY_REFERENCE_TYPE: &str = "OTHR";

/// pain.001 element and attribute names used at transaction level.
pub mod tags {
    pub const CREDIT_TRANSFER_TX_INFO: &str = "CdtTrfTxInf";
    pub const PAYMENT_ID: &str = "PmtId";
    pub const INSTRUCTION_ID: &str = "InstrId";
    pub const END_TO_END_ID: &str = "EndToEndId";
    pub const AMOUNT: &str = "Amt";
    pub const INSTRUCTED_AMOUNT: &str = "InstdAmt";
    pub const CURRENCY: &str = "Ccy";
    pub const CREDITOR: &str = "Cdtr";
    pub const CREDITOR_AGENT: &str = "CdtrAgt";
    pub const CREDITOR_ACCOUNT: &str = "CdtrAcct";
    pub const FINANCIAL_INSTITUTION_ID: &str = "FinInstnId";
    pub const CLEARING_SYSTEM_MEMBER_ID: &str = "ClrSysMmbId";
    pub const MEMBER_ID: &str = "MmbId";
    pub const NAME: &str = "Nm";
    pub const POSTAL_ADDRESS: &str = "PstlAdr";
    pub const COUNTRY: &str = "Ctry";
    pub const ID: &str = "Id";
    pub const ORGANISATION_ID: &str = "OrgId";
    pub const OTHER: &str = "Othr";
    pub const SCHEME_NAME: &str = "SchmeNm";
    pub const CODE: &str = "Cd";
    pub const REMITTANCE_INFO: &str = "RmtInf";
    pub const UNSTRUCTURED: &str = "Ustrd";
    pub const STRUCTURED: &str = "Strd";
    pub const CREDITOR_REFERENCE_INFO: &str = "CdtrRefInf";
    pub const CREDITOR_REFERENCE_TYPE: &str = "CdtrRefTp";
    pub const PROPRIETARY: &str = "Prtry";
}

use tags::*;

/// Builds `CdtTrfTxInf` document trees from transactions.
///
/// Lenient by default: an incomplete transaction yields a document with empty
/// leaves. With [`strict`](Self::strict) enabled, [`build`](Self::build)
/// refuses it instead.
///
/// ```
/// use sepa_ct::{DocumentBuilder, SepaError, Transaction};
///
/// let tx = Transaction::new();
/// let err = DocumentBuilder::new().strict(true).build(&tx).unwrap_err();
/// assert!(matches!(err, SepaError::Incomplete(_)));
///
/// let doc = DocumentBuilder::new().build(&tx).unwrap();
/// assert_eq!(doc.name, "CdtTrfTxInf");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder {
    strict: bool,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse incomplete transactions in [`build`](Self::build).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Build the document, checking completeness first when strict.
    pub fn build(&self, tx: &Transaction) -> Result<Node, SepaError> {
        if self.strict {
            let missing = tx.missing_fields();
            if !missing.is_empty() {
                tracing::debug!(
                    instruction_id = tx.instruction_id(),
                    ?missing,
                    "refusing to build incomplete transaction"
                );
                return Err(SepaError::Incomplete(format!(
                    "missing {}",
                    missing.join(", ")
                )));
            }
        }
        Ok(build_transaction(tx))
    }

    /// Build without the completeness check, regardless of strictness.
    pub fn build_unchecked(&self, tx: &Transaction) -> Node {
        build_transaction(tx)
    }
}

/// Map a transaction onto its `CdtTrfTxInf` element.
///
/// Pure and deterministic: building the same transaction twice yields equal
/// trees. Completeness is not checked.
pub fn build_transaction(tx: &Transaction) -> Node {
    tracing::trace!(
        instruction_id = tx.instruction_id(),
        code_based = tx.uses_beneficiary_code(),
        "building transaction document"
    );

    let mut root = Node::new(CREDIT_TRANSFER_TX_INFO)
        .with_child(payment_id(tx))
        .with_child(amount(tx));

    root = match tx.creditor_scheme() {
        CreditorScheme::CodeBased { customer_code } => {
            root.with_child(code_based_creditor(customer_code))
        }
        CreditorScheme::Full {
            agent,
            name,
            country,
            account,
        } => root
            .with_child(creditor_agent(&agent))
            .with_child(
                Node::new(CREDITOR)
                    .with_child(Node::leaf(NAME, name))
                    .with_child(postal_address(country)),
            )
            .with_child(creditor_account(account)),
    };

    if !tx.remittance_info().is_empty() {
        root = root.with_child(remittance(tx.remittance_info()));
    }

    root
}

fn payment_id(tx: &Transaction) -> Node {
    Node::new(PAYMENT_ID)
        .with_child(Node::leaf(INSTRUCTION_ID, tx.instruction_id()))
        .with_child(Node::leaf(END_TO_END_ID, tx.end_to_end_id()))
}

fn amount(tx: &Transaction) -> Node {
    Node::new(AMOUNT).with_child(
        Node::leaf(INSTRUCTED_AMOUNT, tx.instructed_amount())
            .with_attribute(CURRENCY, tx.currency()),
    )
}

fn code_based_creditor(customer_code: &str) -> Node {
    let other = Node::new(OTHER)
        .with_child(Node::leaf(ID, customer_code))
        .with_child(Node::new(SCHEME_NAME).with_child(Node::leaf(CODE, CUSTOMER_SCHEME_CODE)));

    Node::new(CREDITOR).with_child(
        Node::new(ID).with_child(Node::new(ORGANISATION_ID).with_child(other)),
    )
}

fn creditor_agent(agent: &CreditorAgent<'_>) -> Node {
    let institution = Node::new(FINANCIAL_INSTITUTION_ID)
        .with_child(
            Node::new(CLEARING_SYSTEM_MEMBER_ID)
                .with_child(Node::leaf(MEMBER_ID, agent.clearance_code)),
        )
        .with_child(Node::leaf(NAME, agent.name))
        .with_child(postal_address(agent.country));

    Node::new(CREDITOR_AGENT).with_child(institution)
}

fn postal_address(country: &str) -> Node {
    Node::new(POSTAL_ADDRESS).with_child(Node::leaf(COUNTRY, country))
}

fn creditor_account(account: &str) -> Node {
    Node::new(CREDITOR_ACCOUNT)
        .with_child(Node::new(ID).with_child(Node::new(OTHER).with_child(Node::leaf(ID, account))))
}

fn remittance(info: &str) -> Node {
    let reference_type = Node::new(CREDITOR_REFERENCE_TYPE)
        .with_child(Node::leaf(PROPRIETARY, PROPRIETARY_REFERENCE_TYPE));

    Node::new(REMITTANCE_INFO)
        .with_child(Node::leaf(UNSTRUCTURED, info))
        .with_child(
            Node::new(STRUCTURED)
                .with_child(Node::new(CREDITOR_REFERENCE_INFO).with_child(reference_type)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx() -> Transaction {
        let mut tx = Transaction::new();
        tx.set_instruction_id("I1").set_end_to_end_id("E1");
        tx.set_iban("GB82WEST12345698765432").unwrap();
        tx
    }

    #[test]
    fn code_based_order() {
        let doc = build_transaction(&tx());
        assert_eq!(doc.element_names(), vec!["PmtId", "Amt", "Cdtr"]);
        let code = doc
            .find_path(&["Cdtr", "Id", "OrgId", "Othr", "SchmeNm", "Cd"])
            .unwrap();
        assert_eq!(code.text(), "CUST");
    }

    #[test]
    fn full_scheme_order() {
        let mut tx = tx();
        tx.set_uses_beneficiary_code(false);
        let doc = build_transaction(&tx);
        assert_eq!(
            doc.element_names(),
            vec!["PmtId", "Amt", "CdtrAgt", "Cdtr", "CdtrAcct"]
        );
        assert_eq!(
            doc.find_path(&["CdtrAgt", "FinInstnId"]).unwrap().element_names(),
            vec!["ClrSysMmbId", "Nm", "PstlAdr"]
        );
    }

    #[test]
    fn remittance_is_last() {
        let mut tx = tx();
        tx.set_remittance_info("Invoice 42").unwrap();
        let doc = build_transaction(&tx);
        assert_eq!(doc.element_names(), vec!["PmtId", "Amt", "Cdtr", "RmtInf"]);
        let rmt = doc.find("RmtInf").unwrap();
        assert_eq!(rmt.element_names(), vec!["Ustrd", "Strd"]);
        assert_eq!(
            rmt.find_path(&["Strd", "CdtrRefInf", "CdtrRefTp", "Prtry"])
                .unwrap()
                .text(),
            "OTHR"
        );
    }

    #[test]
    fn strict_names_missing_fields() {
        let err = DocumentBuilder::new().strict(true).build(&tx()).unwrap_err();
        assert_eq!(err, SepaError::Incomplete("missing bic, creditor_name".into()));
    }

    #[test]
    fn unchecked_ignores_strictness() {
        let builder = DocumentBuilder::new().strict(true);
        assert!(builder.is_strict());
        assert_eq!(builder.build_unchecked(&tx()), build_transaction(&tx()));
    }
}
