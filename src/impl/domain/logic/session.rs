use chrono::{Datelike, NaiveDate};
use fractic_server_error::ServerError;

use super::derivations;
use crate::{
    entities::{
        PaymentData, PaymentRecord, PaymentRecordId, PaymentStatus, Settlement, Teacher,
        TeacherForm, TeacherId, TeacherStatus,
    },
    errors::TeacherNotFound,
};

/// Aggregates the overview and reports views are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    pub teacher_count: usize,
    pub active_count: usize,
    pub on_leave_count: usize,
    pub pending_count: usize,
    pub total_pending: f64,
    pub record_count: usize,
    pub monthly_total: f64,
    pub recent_payment_count: usize,
    pub average_salary: f64,
    pub average_experience: f64,
}

/// Canonical session state: the teacher roster and the payment ledger, owned
/// exclusively here for the lifetime of one page session. All mutation goes
/// through the operations below; reads hand out shared references only.
#[derive(Debug)]
pub struct DashboardSession {
    teachers: Vec<Teacher>,
    payment_records: Vec<PaymentRecord>,
    next_teacher_id: u64,
    next_record_id: u64,
}

impl DashboardSession {
    pub fn new(teachers: Vec<Teacher>, payment_records: Vec<PaymentRecord>) -> Self {
        // Id allocation is monotonic, starting past anything seeded.
        let next_teacher_id = teachers.iter().map(|t| t.id.0 + 1).max().unwrap_or(1);
        let next_record_id = payment_records
            .iter()
            .map(|r| r.id.0 + 1)
            .max()
            .unwrap_or(1);
        Self {
            teachers,
            payment_records,
            next_teacher_id,
            next_record_id,
        }
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn payment_records(&self) -> &[PaymentRecord] {
        &self.payment_records
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Append a new teacher, assigning a fresh id. Status defaults to active
    /// unless the form overrides it.
    pub fn add_teacher(&mut self, form: TeacherForm) -> TeacherId {
        let id = TeacherId(self.next_teacher_id);
        self.next_teacher_id += 1;
        self.teachers.push(Teacher {
            id,
            employee_id: form.employee_id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
            department: form.department,
            subject: form.subject,
            qualification: form.qualification,
            experience: form.experience,
            join_date: form.join_date,
            salary: form.salary,
            status: form.status.unwrap_or(TeacherStatus::Active),
            pending_payment: form.pending_payment,
            last_payment_date: None,
        });
        id
    }

    /// Replace the matching teacher's fields, preserving the id and the
    /// payment-completion timestamp. An unspecified status keeps the current
    /// one.
    pub fn edit_teacher(&mut self, id: TeacherId, form: TeacherForm) -> Result<(), ServerError> {
        let teacher = self
            .teachers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TeacherNotFound::new(&id))?;
        *teacher = Teacher {
            id,
            employee_id: form.employee_id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
            department: form.department,
            subject: form.subject,
            qualification: form.qualification,
            experience: form.experience,
            join_date: form.join_date,
            salary: form.salary,
            status: form.status.unwrap_or(teacher.status),
            pending_payment: form.pending_payment,
            last_payment_date: teacher.last_payment_date,
        };
        Ok(())
    }

    pub fn delete_teacher(&mut self, id: TeacherId) -> Result<(), ServerError> {
        let before = self.teachers.len();
        self.teachers.retain(|t| t.id != id);
        if self.teachers.len() == before {
            return Err(TeacherNotFound::new(&id));
        }
        Ok(())
    }

    /// Record a settled payment: prepend the ledger entry (most-recent-first
    /// display convention) and, for targeted payments, clear the teacher's
    /// pending amount and stamp the completion date. Only ever called for
    /// approved outcomes.
    pub fn apply_payment(&mut self, data: &PaymentData, settlement: &Settlement) -> PaymentRecordId {
        let id = PaymentRecordId(self.next_record_id);
        self.next_record_id += 1;

        let teacher_name = data
            .teacher_id
            .and_then(|tid| self.teacher(tid))
            .map(|t| t.full_name());

        self.payment_records.insert(
            0,
            PaymentRecord {
                id,
                teacher_id: data.teacher_id,
                teacher_name,
                amount: data.amount,
                currency: data.currency,
                payment_type: data.payment_type,
                description: data.description.clone(),
                date: settlement.completed_on,
                status: PaymentStatus::Completed,
                transaction_id: Some(settlement.transaction_id.clone()),
                method: data.method.name.clone(),
            },
        );

        if let Some(tid) = data.teacher_id {
            if let Some(teacher) = self.teachers.iter_mut().find(|t| t.id == tid) {
                teacher.pending_payment = Some(0.0);
                teacher.last_payment_date = Some(settlement.completed_on);
            }
        }

        id
    }

    /// Recomputed on every call; nothing is cached.
    pub fn overview(&self, today: NaiveDate) -> OverviewStats {
        OverviewStats {
            teacher_count: self.teachers.len(),
            active_count: derivations::active_count(&self.teachers),
            on_leave_count: derivations::on_leave_count(&self.teachers),
            pending_count: derivations::pending_count(&self.teachers),
            total_pending: derivations::total_pending(&self.teachers),
            record_count: self.payment_records.len(),
            monthly_total: derivations::monthly_total(
                &self.payment_records,
                today.year(),
                today.month(),
            ),
            recent_payment_count: derivations::recent_payment_count(&self.payment_records, today),
            average_salary: derivations::average_salary(&self.teachers),
            average_experience: derivations::average_experience(&self.teachers),
        }
    }
}
