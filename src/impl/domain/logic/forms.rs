use regex::Regex;

use super::card_input::format_card_number;
use crate::entities::{BillingAddress, CardDetails};

// Form-state holders for the two wizard data-entry steps. Validation failures
// are values, not errors: they populate a per-field message map that blocks
// the forward transition until the field is corrected. Editing a field clears
// only that field's message.

/// One optional message per card field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFieldErrors {
    pub number: Option<String>,
    pub name: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub cvv: Option<String>,
}

impl CardFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.name.is_none()
            && self.expiry_month.is_none()
            && self.expiry_year.is_none()
            && self.cvv.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardForm {
    values: CardDetails,
    errors: CardFieldErrors,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing previously entered values (back-navigation).
    pub fn with_values(values: CardDetails) -> Self {
        Self {
            values,
            errors: CardFieldErrors::default(),
        }
    }

    pub fn values(&self) -> &CardDetails {
        &self.values
    }

    pub fn errors(&self) -> &CardFieldErrors {
        &self.errors
    }

    /// Card-number input is reformatted into 4-digit groups as typed.
    pub fn set_number(&mut self, input: &str) {
        self.values.number = format_card_number(input);
        self.errors.number = None;
    }

    pub fn set_name(&mut self, input: &str) {
        self.values.name = input.to_string();
        self.errors.name = None;
    }

    pub fn set_expiry_month(&mut self, input: &str) {
        self.values.expiry_month = input.to_string();
        self.errors.expiry_month = None;
    }

    pub fn set_expiry_year(&mut self, input: &str) {
        self.values.expiry_year = input.to_string();
        self.errors.expiry_year = None;
    }

    /// CVV input is stripped to digits and capped at 4.
    pub fn set_cvv(&mut self, input: &str) {
        self.values.cvv = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(4)
            .collect();
        self.errors.cvv = None;
    }

    /// Validate all fields. On success returns the entered card details; on
    /// failure the per-field messages remain readable via [`Self::errors`].
    pub fn validate(&mut self) -> Result<CardDetails, CardFieldErrors> {
        let mut errors = CardFieldErrors::default();

        let raw_number = self.values.raw_number();
        if raw_number.is_empty() {
            errors.number = Some("Card number is required".to_string());
        } else if raw_number.len() < 13 {
            errors.number = Some("Card number is invalid".to_string());
        }

        if self.values.name.trim().is_empty() {
            errors.name = Some("Cardholder name is required".to_string());
        }

        if self.values.expiry_month.is_empty() {
            errors.expiry_month = Some("Expiry month is required".to_string());
        }

        if self.values.expiry_year.is_empty() {
            errors.expiry_year = Some("Expiry year is required".to_string());
        }

        if self.values.cvv.is_empty() {
            errors.cvv = Some("CVV is required".to_string());
        } else if self.values.cvv.len() < 3 {
            errors.cvv = Some("CVV is invalid".to_string());
        }

        self.errors = errors.clone();
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(errors)
        }
    }
}

/// One optional message per billing-address field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFieldErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl AddressFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
            && self.country.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressForm {
    values: BillingAddress,
    errors: AddressFieldErrors,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: BillingAddress) -> Self {
        Self {
            values,
            errors: AddressFieldErrors::default(),
        }
    }

    pub fn values(&self) -> &BillingAddress {
        &self.values
    }

    pub fn errors(&self) -> &AddressFieldErrors {
        &self.errors
    }

    pub fn set_first_name(&mut self, input: &str) {
        self.values.first_name = input.to_string();
        self.errors.first_name = None;
    }

    pub fn set_last_name(&mut self, input: &str) {
        self.values.last_name = input.to_string();
        self.errors.last_name = None;
    }

    pub fn set_email(&mut self, input: &str) {
        self.values.email = input.to_string();
        self.errors.email = None;
    }

    pub fn set_phone(&mut self, input: &str) {
        self.values.phone = input.to_string();
        self.errors.phone = None;
    }

    pub fn set_address(&mut self, input: &str) {
        self.values.address = input.to_string();
        self.errors.address = None;
    }

    pub fn set_city(&mut self, input: &str) {
        self.values.city = input.to_string();
        self.errors.city = None;
    }

    pub fn set_state(&mut self, input: &str) {
        self.values.state = input.to_string();
        self.errors.state = None;
    }

    pub fn set_zip_code(&mut self, input: &str) {
        self.values.zip_code = input.to_string();
        self.errors.zip_code = None;
    }

    pub fn set_country(&mut self, input: &str) {
        self.values.country = input.to_string();
        self.errors.country = None;
    }

    pub fn validate(&mut self) -> Result<BillingAddress, AddressFieldErrors> {
        let email_pattern =
            Regex::new(r"\S+@\S+\.\S+").expect("hardcoded regex should be valid");
        let mut errors = AddressFieldErrors::default();

        if self.values.first_name.trim().is_empty() {
            errors.first_name = Some("First name is required".to_string());
        }
        if self.values.last_name.trim().is_empty() {
            errors.last_name = Some("Last name is required".to_string());
        }
        if self.values.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !email_pattern.is_match(&self.values.email) {
            errors.email = Some("Email is invalid".to_string());
        }
        if self.values.phone.trim().is_empty() {
            errors.phone = Some("Phone is required".to_string());
        }
        if self.values.address.trim().is_empty() {
            errors.address = Some("Address is required".to_string());
        }
        if self.values.city.trim().is_empty() {
            errors.city = Some("City is required".to_string());
        }
        if self.values.state.trim().is_empty() {
            errors.state = Some("State is required".to_string());
        }
        if self.values.zip_code.trim().is_empty() {
            errors.zip_code = Some("ZIP code is required".to_string());
        }
        if self.values.country.trim().is_empty() {
            errors.country = Some("Country is required".to_string());
        }

        self.errors = errors.clone();
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_card_form() -> CardForm {
        let mut form = CardForm::new();
        form.set_number("4111111111111111");
        form.set_name("Sarah Johnson");
        form.set_expiry_month("09");
        form.set_expiry_year("2027");
        form.set_cvv("123");
        form
    }

    fn filled_address_form() -> AddressForm {
        let mut form = AddressForm::new();
        form.set_first_name("Sarah");
        form.set_last_name("Johnson");
        form.set_email("sarah@school.edu");
        form.set_phone("+1 555-0100");
        form.set_address("12 Elm Street");
        form.set_city("Springfield");
        form.set_state("IL");
        form.set_zip_code("62704");
        form.set_country("United States");
        form
    }

    #[test]
    fn complete_card_form_validates() {
        let mut form = filled_card_form();
        let details = form.validate().unwrap();
        assert_eq!(details.number, "4111 1111 1111 1111");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn short_card_number_is_rejected() {
        let mut form = filled_card_form();
        form.set_number("4111 1111");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.number.as_deref(), Some("Card number is invalid"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn blank_cardholder_name_is_rejected() {
        let mut form = filled_card_form();
        form.set_name("   ");
        let errors = form.validate().unwrap_err();
        assert!(errors.name.is_some());
    }

    #[test]
    fn cvv_input_is_digit_stripped_and_capped() {
        let mut form = CardForm::new();
        form.set_cvv("12a3456");
        assert_eq!(form.values().cvv, "1234");
        form.set_cvv("12");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.cvv.as_deref(), Some("CVV is invalid"));
    }

    #[test]
    fn correcting_a_field_clears_only_that_error() {
        let mut form = filled_card_form();
        form.set_number("");
        form.set_cvv("");
        let errors = form.validate().unwrap_err();
        assert!(errors.number.is_some());
        assert!(errors.cvv.is_some());

        form.set_number("4111111111111111");
        assert!(form.errors().number.is_none());
        assert!(form.errors().cvv.is_some());
    }

    #[test]
    fn complete_address_validates() {
        let mut form = filled_address_form();
        let address = form.validate().unwrap();
        assert_eq!(address.city, "Springfield");
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut form = filled_address_form();
        form.set_email("not-an-email");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"));

        form.set_email("a@b.co");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn all_address_fields_are_required() {
        let mut form = AddressForm::new();
        let errors = form.validate().unwrap_err();
        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.address.is_some());
        assert!(errors.city.is_some());
        assert!(errors.state.is_some());
        assert!(errors.zip_code.is_some());
        assert!(errors.country.is_some());
    }
}
