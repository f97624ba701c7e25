use fractic_server_error::ServerError;
use iso_currency::Currency;

use super::forms::{AddressForm, CardForm};
use crate::{
    entities::{
        BillingAddress, CardDetails, PaymentData, PaymentMethod, PaymentType, Teacher, TeacherId,
        WizardStep,
    },
    errors::{InvalidAmount, WizardStepMismatch},
};

/// Tagged step state. Each forward transition moves the validated values of
/// the previous step into the next variant, so `Review` holds everything
/// needed to assemble a [`PaymentData`] and a card-details payload can only
/// exist behind a card method.
#[derive(Debug, Clone)]
enum Stage {
    SelectMethod,
    CardDetails {
        method: PaymentMethod,
    },
    BillingAddress {
        method: PaymentMethod,
        card: Option<CardDetails>,
    },
    Review {
        method: PaymentMethod,
        card: Option<CardDetails>,
        billing: BillingAddress,
    },
}

/// One payment run: method selection, conditional card entry, billing
/// address, then review. All state is owned by the wizard; cancellation is
/// dropping it. Backward navigation never loses entered values because the
/// two entry forms live on the wizard itself, not in the step state.
#[derive(Debug, Clone)]
pub struct PaymentWizard {
    stage: Stage,
    payment_type: PaymentType,
    amount: f64,
    currency: Currency,
    description: String,
    /// Set once the caller overrides the synthesized description; after that,
    /// changing the payment type no longer rewrites it.
    description_touched: bool,
    teacher_id: Option<TeacherId>,
    teacher_name: Option<String>,
    card_form: CardForm,
    address_form: AddressForm,
}

impl PaymentWizard {
    /// Start a run, optionally targeted at a teacher. The target's pending
    /// amount becomes the default amount and the description is synthesized
    /// from the payment type and teacher name.
    pub fn new(teacher: Option<&Teacher>) -> Self {
        let payment_type = PaymentType::Salary;
        Self {
            stage: Stage::SelectMethod,
            payment_type,
            amount: teacher.map(|t| t.pending_amount()).unwrap_or(0.0),
            currency: Currency::USD,
            description: teacher
                .map(|t| synthesize_description(payment_type, &t.full_name()))
                .unwrap_or_default(),
            description_touched: false,
            teacher_id: teacher.map(|t| t.id),
            teacher_name: teacher.map(|t| t.full_name()),
            card_form: CardForm::new(),
            address_form: AddressForm::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        match &self.stage {
            Stage::SelectMethod => WizardStep::SelectMethod,
            Stage::CardDetails { .. } => WizardStep::CardDetails,
            Stage::BillingAddress { .. } => WizardStep::BillingAddress,
            Stage::Review { .. } => WizardStep::Review,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn teacher_id(&self) -> Option<TeacherId> {
        self.teacher_id
    }

    pub fn selected_method(&self) -> Option<&PaymentMethod> {
        match &self.stage {
            Stage::SelectMethod => None,
            Stage::CardDetails { method }
            | Stage::BillingAddress { method, .. }
            | Stage::Review { method, .. } => Some(method),
        }
    }

    pub fn card_form(&self) -> &CardForm {
        &self.card_form
    }

    pub fn card_form_mut(&mut self) -> &mut CardForm {
        &mut self.card_form
    }

    pub fn address_form(&self) -> &AddressForm {
        &self.address_form
    }

    pub fn address_form_mut(&mut self) -> &mut AddressForm {
        &mut self.address_form
    }

    // Step 1 mutators.
    // ---

    pub fn set_amount(&mut self, amount: f64) -> Result<(), ServerError> {
        if amount < 0.0 {
            return Err(InvalidAmount::new(amount));
        }
        self.amount = amount;
        Ok(())
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
        if !self.description_touched {
            if let Some(name) = &self.teacher_name {
                self.description = synthesize_description(payment_type, name);
            }
        }
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
        self.description_touched = true;
    }

    // Transitions.
    // ---

    /// Selecting a card method advances to card entry; every other method
    /// skips straight to the billing address.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), ServerError> {
        self.require_step(WizardStep::SelectMethod)?;
        self.stage = if method.kind.requires_card_details() {
            Stage::CardDetails { method }
        } else {
            Stage::BillingAddress { method, card: None }
        };
        Ok(())
    }

    /// Validate the card form and advance on success. Returns `Ok(false)`
    /// when validation blocked the transition; the per-field messages stay
    /// readable on [`Self::card_form`].
    pub fn submit_card_details(&mut self) -> Result<bool, ServerError> {
        let Stage::CardDetails { method } = &self.stage else {
            return Err(WizardStepMismatch::new(&WizardStep::CardDetails, &self.step()));
        };
        let method = method.clone();
        let card = match self.card_form.validate() {
            Ok(card) => card,
            Err(_) => return Ok(false),
        };
        self.stage = Stage::BillingAddress {
            method,
            card: Some(card),
        };
        Ok(true)
    }

    /// Validate the billing form and advance to review on success. Same
    /// blocking contract as [`Self::submit_card_details`].
    pub fn submit_billing_address(&mut self) -> Result<bool, ServerError> {
        let Stage::BillingAddress { method, card } = &self.stage else {
            return Err(WizardStepMismatch::new(
                &WizardStep::BillingAddress,
                &self.step(),
            ));
        };
        let (method, card) = (method.clone(), card.clone());
        let billing = match self.address_form.validate() {
            Ok(billing) => billing,
            Err(_) => return Ok(false),
        };
        self.stage = Stage::Review {
            method,
            card,
            billing,
        };
        Ok(true)
    }

    /// Go back one step, skipping card entry in reverse for non-card
    /// methods. No-op on the first step. Entered values are preserved.
    pub fn back(&mut self) {
        self.stage = match self.stage.clone() {
            Stage::SelectMethod => Stage::SelectMethod,
            Stage::CardDetails { .. } => Stage::SelectMethod,
            Stage::BillingAddress { method, .. } => {
                if method.kind.requires_card_details() {
                    Stage::CardDetails { method }
                } else {
                    Stage::SelectMethod
                }
            }
            Stage::Review { method, card, .. } => Stage::BillingAddress { method, card },
        };
    }

    /// The assembled payload, available at the review step only.
    pub fn payment_data(&self) -> Option<PaymentData> {
        let Stage::Review {
            method,
            card,
            billing,
        } = &self.stage
        else {
            return None;
        };
        Some(PaymentData {
            amount: self.amount,
            currency: self.currency,
            method: method.clone(),
            card_details: card.clone(),
            billing_address: billing.clone(),
            payment_type: self.payment_type,
            teacher_id: self.teacher_id,
            description: self.description.clone(),
        })
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), ServerError> {
        let actual = self.step();
        if actual != expected {
            return Err(WizardStepMismatch::new(&expected, &actual));
        }
        Ok(())
    }
}

fn synthesize_description(payment_type: PaymentType, teacher_name: &str) -> String {
    let prefix = match payment_type {
        PaymentType::Salary => "Monthly salary",
        _ => "Payment",
    };
    format!("{} for {}", prefix, teacher_name)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        entities::{MethodKind, TeacherStatus},
        seed::payment_method_catalog,
    };

    fn sample_teacher() -> Teacher {
        Teacher {
            id: TeacherId(7),
            employee_id: "EMP007".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah@school.edu".to_string(),
            phone: "+1 555-0100".to_string(),
            department: "Math".to_string(),
            subject: "Algebra".to_string(),
            qualification: "M.Ed".to_string(),
            experience: 8,
            join_date: NaiveDate::from_ymd_opt(2019, 8, 15).unwrap(),
            salary: 52000.0,
            status: TeacherStatus::Active,
            pending_payment: Some(500.0),
            last_payment_date: None,
        }
    }

    fn method(kind: MethodKind) -> PaymentMethod {
        payment_method_catalog()
            .into_iter()
            .find(|m| m.kind == kind)
            .expect("catalog covers every method kind")
    }

    fn fill_card_form(wizard: &mut PaymentWizard) {
        let form = wizard.card_form_mut();
        form.set_number("4111111111111111");
        form.set_name("Sarah Johnson");
        form.set_expiry_month("09");
        form.set_expiry_year("2027");
        form.set_cvv("123");
    }

    fn fill_address_form(wizard: &mut PaymentWizard) {
        let form = wizard.address_form_mut();
        form.set_first_name("Sarah");
        form.set_last_name("Johnson");
        form.set_email("sarah@school.edu");
        form.set_phone("+1 555-0100");
        form.set_address("12 Elm Street");
        form.set_city("Springfield");
        form.set_state("IL");
        form.set_zip_code("62704");
        form.set_country("United States");
    }

    #[test]
    fn defaults_come_from_the_target_teacher() {
        let teacher = sample_teacher();
        let wizard = PaymentWizard::new(Some(&teacher));
        assert_eq!(wizard.amount(), 500.0);
        assert_eq!(wizard.description(), "Monthly salary for Sarah Johnson");
        assert_eq!(wizard.teacher_id(), Some(TeacherId(7)));

        let untargeted = PaymentWizard::new(None);
        assert_eq!(untargeted.amount(), 0.0);
        assert_eq!(untargeted.description(), "");
    }

    #[test]
    fn changing_payment_type_rewrites_untouched_description() {
        let teacher = sample_teacher();
        let mut wizard = PaymentWizard::new(Some(&teacher));
        wizard.set_payment_type(PaymentType::Bonus);
        assert_eq!(wizard.description(), "Payment for Sarah Johnson");

        wizard.set_description("Q2 performance bonus");
        wizard.set_payment_type(PaymentType::Salary);
        assert_eq!(wizard.description(), "Q2 performance bonus");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut wizard = PaymentWizard::new(None);
        assert!(wizard.set_amount(-1.0).is_err());
        assert!(wizard.set_amount(250.0).is_ok());
        assert_eq!(wizard.amount(), 250.0);
    }

    #[test]
    fn card_method_enters_card_step() {
        let mut wizard = PaymentWizard::new(None);
        wizard.select_method(method(MethodKind::Card)).unwrap();
        assert_eq!(wizard.step(), WizardStep::CardDetails);
    }

    #[test]
    fn non_card_method_skips_card_step() {
        let mut wizard = PaymentWizard::new(None);
        wizard.select_method(method(MethodKind::Paypal)).unwrap();
        assert_eq!(wizard.step(), WizardStep::BillingAddress);
    }

    #[test]
    fn invalid_card_details_block_the_transition() {
        let mut wizard = PaymentWizard::new(None);
        wizard.select_method(method(MethodKind::Card)).unwrap();
        assert!(!wizard.submit_card_details().unwrap());
        assert_eq!(wizard.step(), WizardStep::CardDetails);
        assert!(wizard.card_form().errors().number.is_some());
    }

    #[test]
    fn back_navigation_preserves_entered_values() {
        let mut wizard = PaymentWizard::new(None);
        wizard.select_method(method(MethodKind::Card)).unwrap();
        fill_card_form(&mut wizard);
        assert!(wizard.submit_card_details().unwrap());
        assert_eq!(wizard.step(), WizardStep::BillingAddress);

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::CardDetails);
        assert_eq!(wizard.card_form().values().number, "4111 1111 1111 1111");
        assert_eq!(wizard.card_form().values().cvv, "123");

        // Replaying the same forward path works without re-entry.
        assert!(wizard.submit_card_details().unwrap());
        assert_eq!(wizard.step(), WizardStep::BillingAddress);
    }

    #[test]
    fn back_skips_card_step_for_non_card_methods() {
        let mut wizard = PaymentWizard::new(None);
        wizard
            .select_method(method(MethodKind::BankTransfer))
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::BillingAddress);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectMethod);
        // Back on the first step stays put.
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectMethod);
    }

    #[test]
    fn payment_data_is_only_available_at_review() {
        let mut wizard = PaymentWizard::new(None);
        assert!(wizard.payment_data().is_none());

        wizard.select_method(method(MethodKind::Card)).unwrap();
        fill_card_form(&mut wizard);
        assert!(wizard.submit_card_details().unwrap());
        fill_address_form(&mut wizard);
        assert!(wizard.submit_billing_address().unwrap());
        assert_eq!(wizard.step(), WizardStep::Review);

        let data = wizard.payment_data().unwrap();
        assert_eq!(data.method.kind, MethodKind::Card);
        assert_eq!(
            data.card_details.unwrap().number,
            "4111 1111 1111 1111"
        );
        assert_eq!(data.billing_address.city, "Springfield");
    }

    #[test]
    fn non_card_run_carries_no_card_details() {
        let mut wizard = PaymentWizard::new(None);
        wizard.select_method(method(MethodKind::GooglePay)).unwrap();
        fill_address_form(&mut wizard);
        assert!(wizard.submit_billing_address().unwrap());
        let data = wizard.payment_data().unwrap();
        assert!(data.card_details.is_none());
    }

    #[test]
    fn out_of_order_transitions_are_rejected() {
        let mut wizard = PaymentWizard::new(None);
        assert!(wizard.submit_card_details().is_err());
        assert!(wizard.submit_billing_address().is_err());

        wizard.select_method(method(MethodKind::Card)).unwrap();
        assert!(wizard.select_method(method(MethodKind::Paypal)).is_err());
    }
}
