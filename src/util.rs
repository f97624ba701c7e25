use chrono::Local;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::{
        datasources::{
            method_catalog::payment_method_catalog,
            seed_roster::{seed_payment_records, seed_teachers},
        },
        repositories::payment_gateway_impl::SimulatedGatewayImpl,
    },
    domain::{
        logic::{
            derivations,
            session::{DashboardSession, OverviewStats},
            wizard::PaymentWizard,
        },
        repositories::payment_gateway::PaymentGateway,
        usecases::checkout_usecase::{CheckoutUsecase as _, CheckoutUsecaseImpl},
    },
    entities::{
        PaymentMethod, PaymentRecord, PaymentStatus, PaymentType, Teacher, TeacherForm, TeacherId,
        TeacherStatus, WizardOutcome, WizardStep,
    },
    errors::{TeacherNotFound, WizardStepMismatch},
    presentation::{overview_fmt::OverviewPrinter, receipt_fmt::ReceiptPrinter},
};

/// Top-level session controller: owns the canonical collections, dispatches
/// roster mutations, runs the payment wizard to completion, and renders the
/// text views. One instance per page session; state resets when it is
/// dropped.
pub struct TeacherPayUtil<G = SimulatedGatewayImpl>
where
    G: PaymentGateway,
{
    session: DashboardSession,
    checkout_usecase: CheckoutUsecaseImpl<G>,
    receipt_printer: ReceiptPrinter,
    overview_printer: OverviewPrinter,
    currency: Currency,
}

impl TeacherPayUtil {
    pub fn new(teachers: Vec<Teacher>, payment_records: Vec<PaymentRecord>) -> Self {
        Self {
            session: DashboardSession::new(teachers, payment_records),
            checkout_usecase: CheckoutUsecaseImpl::new(),
            receipt_printer: ReceiptPrinter::new(),
            overview_printer: OverviewPrinter::new(),
            currency: Currency::USD,
        }
    }

    /// Boot a demo session from the built-in seed collections.
    pub fn sample() -> Result<Self, ServerError> {
        Ok(Self::new(seed_teachers()?, seed_payment_records()?))
    }
}

impl<G> TeacherPayUtil<G>
where
    G: PaymentGateway,
{
    pub fn with_gateway(
        teachers: Vec<Teacher>,
        payment_records: Vec<PaymentRecord>,
        gateway: G,
    ) -> Self {
        Self {
            session: DashboardSession::new(teachers, payment_records),
            checkout_usecase: CheckoutUsecaseImpl::with_gateway(gateway),
            receipt_printer: ReceiptPrinter::new(),
            overview_printer: OverviewPrinter::new(),
            currency: Currency::USD,
        }
    }

    // Reads.
    // ---

    pub fn teachers(&self) -> &[Teacher] {
        self.session.teachers()
    }

    pub fn payment_records(&self) -> &[PaymentRecord] {
        self.session.payment_records()
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.session.teacher(id)
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        payment_method_catalog()
    }

    pub fn overview(&self) -> OverviewStats {
        self.session.overview(Local::now().date_naive())
    }

    pub fn overview_text(&self) -> String {
        self.overview_printer
            .print_overview(&self.overview(), self.currency)
    }

    pub fn summary_line(&self) -> String {
        self.overview_printer
            .print_summary_line(&self.overview(), self.currency)
    }

    pub fn search_teachers(
        &self,
        search_term: &str,
        department: Option<&str>,
        status: Option<TeacherStatus>,
    ) -> Vec<&Teacher> {
        derivations::filter_teachers(self.session.teachers(), search_term, department, status)
    }

    pub fn search_payments(
        &self,
        search_term: &str,
        status: Option<PaymentStatus>,
        payment_type: Option<PaymentType>,
    ) -> Vec<&PaymentRecord> {
        derivations::filter_payments(
            self.session.payment_records(),
            search_term,
            status,
            payment_type,
        )
    }

    pub fn receipt(&self, record: &PaymentRecord) -> String {
        self.receipt_printer.print_receipt(record)
    }

    // Roster mutations.
    // ---

    pub fn add_teacher(&mut self, form: TeacherForm) -> TeacherId {
        self.session.add_teacher(form)
    }

    pub fn edit_teacher(&mut self, id: TeacherId, form: TeacherForm) -> Result<(), ServerError> {
        self.session.edit_teacher(id, form)
    }

    pub fn delete_teacher(&mut self, id: TeacherId) -> Result<(), ServerError> {
        self.session.delete_teacher(id)
    }

    // Payment flow.
    // ---

    /// Start a wizard run, optionally targeted at a roster teacher. The
    /// returned wizard is independent of the session; dropping it cancels the
    /// run with no side effects.
    pub fn begin_payment(&self, target: Option<TeacherId>) -> Result<PaymentWizard, ServerError> {
        let teacher = match target {
            Some(id) => Some(self.session.teacher(id).ok_or_else(|| TeacherNotFound::new(&id))?),
            None => None,
        };
        Ok(PaymentWizard::new(teacher))
    }

    /// Consume a wizard at the review step: charge the gateway and, on
    /// approval, append the ledger entry and clear the teacher's pending
    /// amount. Declines leave the session untouched. Because the wizard is
    /// taken by value, a run cancelled earlier can never apply a stale
    /// result here.
    pub async fn complete_payment(
        &mut self,
        wizard: PaymentWizard,
    ) -> Result<WizardOutcome, ServerError> {
        let data = wizard
            .payment_data()
            .ok_or_else(|| WizardStepMismatch::new(&WizardStep::Review, &wizard.step()))?;
        let outcome = self.checkout_usecase.submit(data).await?;
        if let WizardOutcome::Approved { settlement, data } = &outcome {
            self.session.apply_payment(data, settlement);
        }
        Ok(outcome)
    }
}
