use chrono::NaiveDate;
use iso_currency::Currency;

use super::{checkout::TransactionId, teacher::TeacherId};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub struct PaymentRecordId(pub(crate) u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentType {
    Salary,
    Bonus,
    Reimbursement,
    CourseFee,
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

/// An immutable ledger entry. Once appended to the session's collection it is
/// never mutated; corrections require a new record. An absent `teacher_id` /
/// `teacher_name` marks a system-level payment.
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentRecordId,
    pub teacher_id: Option<TeacherId>,
    pub teacher_name: Option<String>,
    pub amount: f64,
    pub currency: Currency,
    pub payment_type: PaymentType,
    pub description: String,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub transaction_id: Option<TransactionId>,
    /// Display name of the payment method used.
    pub method: String,
}

// --

impl std::fmt::Display for PaymentRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PAY{}", self.0)
    }
}

impl PaymentType {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Salary => "salary",
            PaymentType::Bonus => "bonus",
            PaymentType::Reimbursement => "reimbursement",
            PaymentType::CourseFee => "course-fee",
            PaymentType::Other => "other",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PaymentRecord {
    /// Name to render for this entry; system-level payments have no teacher.
    pub fn display_name(&self) -> &str {
        self.teacher_name.as_deref().unwrap_or("System Payment")
    }
}
