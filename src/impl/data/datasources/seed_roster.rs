use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    data::models::iso_date_model::ISODateModel,
    entities::{
        PaymentRecord, PaymentRecordId, PaymentStatus, PaymentType, Teacher, TeacherId,
        TeacherStatus, TransactionId,
    },
};

// Demo seed data, equivalent to the mock collections the dashboard boots
// with. Hosts supplying their own collections bypass this module entirely.

struct SeedTeacher {
    employee_id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    department: &'static str,
    subject: &'static str,
    qualification: &'static str,
    experience: u32,
    join_date: &'static str,
    salary: f64,
    status: TeacherStatus,
    pending_payment: Option<f64>,
    last_payment_date: Option<&'static str>,
}

const SEED_TEACHERS: &[SeedTeacher] = &[
    SeedTeacher {
        employee_id: "EMP001",
        first_name: "Sarah",
        last_name: "Johnson",
        email: "sarah.johnson@school.edu",
        phone: "+1 555-0101",
        department: "Mathematics",
        subject: "Algebra",
        qualification: "M.Ed Mathematics",
        experience: 8,
        join_date: "2019-08-15",
        salary: 52000.0,
        status: TeacherStatus::Active,
        pending_payment: Some(4333.0),
        last_payment_date: Some("2025-05-31"),
    },
    SeedTeacher {
        employee_id: "EMP002",
        first_name: "Miguel",
        last_name: "Alvarez",
        email: "miguel.alvarez@school.edu",
        phone: "+1 555-0102",
        department: "Science",
        subject: "Physics",
        qualification: "Ph.D Physics",
        experience: 12,
        join_date: "2015-01-20",
        salary: 61000.0,
        status: TeacherStatus::Active,
        pending_payment: Some(5083.0),
        last_payment_date: Some("2025-05-31"),
    },
    SeedTeacher {
        employee_id: "EMP003",
        first_name: "Priya",
        last_name: "Nair",
        email: "priya.nair@school.edu",
        phone: "+1 555-0103",
        department: "English",
        subject: "Literature",
        qualification: "M.A English",
        experience: 6,
        join_date: "2021-03-01",
        salary: 48000.0,
        status: TeacherStatus::OnLeave,
        pending_payment: None,
        last_payment_date: Some("2025-04-30"),
    },
    SeedTeacher {
        employee_id: "EMP004",
        first_name: "Daniel",
        last_name: "Okafor",
        email: "daniel.okafor@school.edu",
        phone: "+1 555-0104",
        department: "Arts",
        subject: "Sculpture",
        qualification: "B.F.A",
        experience: 4,
        join_date: "2022-09-05",
        salary: 43000.0,
        status: TeacherStatus::Inactive,
        pending_payment: Some(0.0),
        last_payment_date: Some("2025-02-28"),
    },
];

struct SeedRecord {
    teacher_index: Option<usize>,
    amount: f64,
    payment_type: PaymentType,
    description: &'static str,
    date: &'static str,
    status: PaymentStatus,
    transaction_id: Option<&'static str>,
    method: &'static str,
}

const SEED_RECORDS: &[SeedRecord] = &[
    SeedRecord {
        teacher_index: Some(0),
        amount: 4333.0,
        payment_type: PaymentType::Salary,
        description: "Monthly salary for Sarah Johnson",
        date: "2025-05-31",
        status: PaymentStatus::Completed,
        transaction_id: Some("TXN1748668800000"),
        method: "Bank Transfer",
    },
    SeedRecord {
        teacher_index: Some(1),
        amount: 5083.0,
        payment_type: PaymentType::Salary,
        description: "Monthly salary for Miguel Alvarez",
        date: "2025-05-31",
        status: PaymentStatus::Completed,
        transaction_id: Some("TXN1748668800001"),
        method: "Bank Transfer",
    },
    SeedRecord {
        teacher_index: Some(2),
        amount: 350.0,
        payment_type: PaymentType::Reimbursement,
        description: "Conference travel reimbursement",
        date: "2025-05-12",
        status: PaymentStatus::Completed,
        transaction_id: Some("TXN1747027200000"),
        method: "PayPal",
    },
    SeedRecord {
        teacher_index: None,
        amount: 1200.0,
        payment_type: PaymentType::CourseFee,
        description: "External examiner course fee",
        date: "2025-05-05",
        status: PaymentStatus::Pending,
        transaction_id: None,
        method: "Bank Transfer",
    },
    SeedRecord {
        teacher_index: Some(1),
        amount: 750.0,
        payment_type: PaymentType::Bonus,
        description: "Science fair coordination bonus",
        date: "2025-04-18",
        status: PaymentStatus::Failed,
        transaction_id: Some("TXN1744934400000"),
        method: "Credit/Debit Card",
    },
];

/// Build the demo roster. Errors only if a seed date literal is malformed.
pub fn seed_teachers() -> Result<Vec<Teacher>, ServerError> {
    SEED_TEACHERS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            Ok(Teacher {
                id: TeacherId(i as u64 + 1),
                employee_id: seed.employee_id.to_string(),
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                department: seed.department.to_string(),
                subject: seed.subject.to_string(),
                qualification: seed.qualification.to_string(),
                experience: seed.experience,
                join_date: ISODateModel::from_str(seed.join_date)?.into(),
                salary: seed.salary,
                status: seed.status,
                pending_payment: seed.pending_payment,
                last_payment_date: seed
                    .last_payment_date
                    .map(|d| ISODateModel::from_str(d).map(Into::into))
                    .transpose()?,
            })
        })
        .collect()
}

/// Build the demo payment ledger, most recent first.
pub fn seed_payment_records() -> Result<Vec<PaymentRecord>, ServerError> {
    SEED_RECORDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let teacher = seed.teacher_index.map(|idx| &SEED_TEACHERS[idx]);
            Ok(PaymentRecord {
                id: PaymentRecordId(i as u64 + 1),
                teacher_id: seed.teacher_index.map(|idx| TeacherId(idx as u64 + 1)),
                teacher_name: teacher.map(|t| format!("{} {}", t.first_name, t.last_name)),
                amount: seed.amount,
                currency: Currency::USD,
                payment_type: seed.payment_type,
                description: seed.description.to_string(),
                date: ISODateModel::from_str(seed.date)?.into(),
                status: seed.status,
                transaction_id: seed.transaction_id.map(|t| TransactionId(t.to_string())),
                method: seed.method.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_collections_parse_cleanly() {
        let teachers = seed_teachers().unwrap();
        let records = seed_payment_records().unwrap();
        assert_eq!(teachers.len(), 4);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn seed_record_teacher_links_resolve() {
        let teachers = seed_teachers().unwrap();
        for record in seed_payment_records().unwrap() {
            if let Some(tid) = record.teacher_id {
                let teacher = teachers.iter().find(|t| t.id == tid).unwrap();
                assert_eq!(record.teacher_name.as_deref(), Some(teacher.full_name().as_str()));
            } else {
                assert_eq!(record.display_name(), "System Payment");
            }
        }
    }

    #[test]
    fn seed_pending_amounts_are_non_negative() {
        for teacher in seed_teachers().unwrap() {
            if let Some(pending) = teacher.pending_payment {
                assert!(pending >= 0.0);
            }
        }
    }
}
