use crate::entities::{MethodKind, PaymentMethod};

/// The static catalog of selectable payment channels. Read-only reference
/// data; the wizard never invents methods outside this set.
pub fn payment_method_catalog() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "card".to_string(),
            kind: MethodKind::Card,
            name: "Credit/Debit Card".to_string(),
            icon: "💳".to_string(),
            description: "Pay with Visa, Mastercard, or American Express".to_string(),
        },
        PaymentMethod {
            id: "paypal".to_string(),
            kind: MethodKind::Paypal,
            name: "PayPal".to_string(),
            icon: "🅿️".to_string(),
            description: "Pay with your PayPal account".to_string(),
        },
        PaymentMethod {
            id: "apple-pay".to_string(),
            kind: MethodKind::ApplePay,
            name: "Apple Pay".to_string(),
            icon: "🍎".to_string(),
            description: "Pay with Touch ID or Face ID".to_string(),
        },
        PaymentMethod {
            id: "google-pay".to_string(),
            kind: MethodKind::GooglePay,
            name: "Google Pay".to_string(),
            icon: "🇬".to_string(),
            description: "Pay with your Google account".to_string(),
        },
        PaymentMethod {
            id: "bank-transfer".to_string(),
            kind: MethodKind::BankTransfer,
            name: "Bank Transfer".to_string(),
            icon: "🏦".to_string(),
            description: "Direct transfer from your bank account".to_string(),
        },
    ]
}
