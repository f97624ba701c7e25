#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Other,
}

impl CardBrand {
    pub fn label(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::Other => "Card",
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalize raw card-number input into display form: digits only, capped at
/// 16, grouped in blocks of 4 separated by single spaces. Inputs shorter than
/// one full block are passed through unformatted.
pub fn format_card_number(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return digits;
    }
    let capped = &digits[..digits.len().min(16)];
    capped
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).expect("ascii digits are valid utf-8"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Infer the card brand from the leading digits. Spacing is ignored.
pub fn card_brand(number: &str) -> CardBrand {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with('4') {
        return CardBrand::Visa;
    }
    match digits.get(..2) {
        Some("51" | "52" | "53" | "54" | "55") => CardBrand::Mastercard,
        Some("34" | "37") => CardBrand::AmericanExpress,
        _ => CardBrand::Other,
    }
}
