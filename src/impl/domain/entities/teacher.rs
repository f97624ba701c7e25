use chrono::NaiveDate;

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
pub struct TeacherId(pub(crate) u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TeacherStatus {
    Active,
    Inactive,
    OnLeave,
}

/// A staff record. Owned exclusively by the session; `pending_payment` and
/// `last_payment_date` are maintained by payment completion, not by the
/// add/edit forms.
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub subject: String,
    pub qualification: String,
    /// Years of teaching experience.
    pub experience: u32,
    pub join_date: NaiveDate,
    pub salary: f64,
    pub status: TeacherStatus,
    /// Amount owed but not yet settled. Non-negative when present.
    pub pending_payment: Option<f64>,
    pub last_payment_date: Option<NaiveDate>,
}

/// Submitted add/edit payload (everything except the id, which the session
/// assigns and preserves).
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct TeacherForm {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub subject: String,
    pub qualification: String,
    pub experience: u32,
    pub join_date: NaiveDate,
    pub salary: f64,
    /// Defaults to `Active` on create; keeps the existing status on edit.
    pub status: Option<TeacherStatus>,
    pub pending_payment: Option<f64>,
}

// --

impl TeacherId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TeacherStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "active",
            TeacherStatus::Inactive => "inactive",
            TeacherStatus::OnLeave => "on-leave",
        }
    }
}

impl std::fmt::Display for TeacherStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Amount owed, treating an absent value as settled.
    pub fn pending_amount(&self) -> f64 {
        self.pending_payment.unwrap_or(0.0)
    }
}
