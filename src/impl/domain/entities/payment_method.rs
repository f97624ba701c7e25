#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MethodKind {
    Card,
    Paypal,
    ApplePay,
    GooglePay,
    BankTransfer,
}

/// A selectable payment channel. Read-only reference data; the built-in
/// catalog lives in the data layer.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: MethodKind,
    pub name: String,
    pub icon: String,
    pub description: String,
}

// --

impl MethodKind {
    pub fn label(&self) -> &'static str {
        match self {
            MethodKind::Card => "card",
            MethodKind::Paypal => "paypal",
            MethodKind::ApplePay => "apple-pay",
            MethodKind::GooglePay => "google-pay",
            MethodKind::BankTransfer => "bank-transfer",
        }
    }

    /// Only card methods require card-detail collection before billing.
    pub fn requires_card_details(&self) -> bool {
        matches!(self, MethodKind::Card)
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
