use chrono::NaiveDate;
use iso_currency::Currency;

use super::{
    payment_method::PaymentMethod,
    payment_record::PaymentType,
    teacher::TeacherId,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct TransactionId(pub(crate) String);

/// Card form values for a single wizard run. Never persisted; discarded when
/// the run ends, whatever the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    /// Formatted presentation value ("4111 1111 1111 1111").
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    /// Cardholder name.
    pub name: String,
}

/// Billing address values for a single wizard run. Same lifetime as
/// [`CardDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Everything the gateway needs to settle one payment. Assembled by the
/// wizard at the review step.
#[derive(Debug, Clone)]
pub struct PaymentData {
    pub amount: f64,
    pub currency: Currency,
    pub method: PaymentMethod,
    /// Present only when the selected method is a card.
    pub card_details: Option<CardDetails>,
    pub billing_address: BillingAddress,
    pub payment_type: PaymentType,
    pub teacher_id: Option<TeacherId>,
    pub description: String,
}

/// Successful gateway response.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub transaction_id: TransactionId,
    pub completed_on: NaiveDate,
}

/// Position within the payment wizard. The card-details step is only ever
/// entered for card methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectMethod,
    CardDetails,
    BillingAddress,
    Review,
}

/// Terminal result of one wizard run.
#[derive(Debug, Clone)]
pub enum WizardOutcome {
    Approved {
        settlement: Settlement,
        data: PaymentData,
    },
    Declined {
        message: String,
    },
}

// --

impl TransactionId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::SelectMethod => "select-method",
            WizardStep::CardDetails => "card-details",
            WizardStep::BillingAddress => "billing-address",
            WizardStep::Review => "review",
        }
    }

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectMethod => 1,
            WizardStep::CardDetails => 2,
            WizardStep::BillingAddress => 3,
            WizardStep::Review => 4,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl CardDetails {
    /// Digits only, spacing stripped.
    pub fn raw_number(&self) -> String {
        self.number.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Last four digits, for masked display.
    pub fn last_four(&self) -> String {
        let raw = self.raw_number();
        raw.chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect()
    }
}
