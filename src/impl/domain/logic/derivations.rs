use chrono::{Datelike, NaiveDate};

use crate::entities::{PaymentRecord, PaymentStatus, PaymentType, Teacher, TeacherStatus};

// Pure aggregates over the canonical collections. Recomputed on every read;
// inputs are small and in-memory, so no caching is done.

pub fn active_count(teachers: &[Teacher]) -> usize {
    teachers
        .iter()
        .filter(|t| t.status == TeacherStatus::Active)
        .count()
}

pub fn on_leave_count(teachers: &[Teacher]) -> usize {
    teachers
        .iter()
        .filter(|t| t.status == TeacherStatus::OnLeave)
        .count()
}

/// Sum of all pending payments, treating absent as 0.
pub fn total_pending(teachers: &[Teacher]) -> f64 {
    teachers.iter().map(|t| t.pending_amount()).sum()
}

/// Teachers owed money, in original roster order.
pub fn teachers_with_pending(teachers: &[Teacher]) -> Vec<&Teacher> {
    teachers.iter().filter(|t| t.pending_amount() > 0.0).collect()
}

pub fn pending_count(teachers: &[Teacher]) -> usize {
    teachers_with_pending(teachers).len()
}

/// Sum of record amounts dated in the given calendar month. Month bucketing
/// is by calendar month index, not a rolling 30-day window.
pub fn monthly_total(records: &[PaymentRecord], year: i32, month: u32) -> f64 {
    records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .map(|r| r.amount)
        .sum()
}

/// Records dated within the trailing week, `today` inclusive.
pub fn recent_payment_count(records: &[PaymentRecord], today: NaiveDate) -> usize {
    let week_ago = today - chrono::Duration::days(7);
    records
        .iter()
        .filter(|r| r.date >= week_ago && r.date <= today)
        .count()
}

/// Mean salary across the roster; 0 for an empty roster.
pub fn average_salary(teachers: &[Teacher]) -> f64 {
    if teachers.is_empty() {
        return 0.0;
    }
    teachers.iter().map(|t| t.salary).sum::<f64>() / teachers.len() as f64
}

/// Mean years of experience across the roster; 0 for an empty roster.
pub fn average_experience(teachers: &[Teacher]) -> f64 {
    if teachers.is_empty() {
        return 0.0;
    }
    teachers.iter().map(|t| t.experience as f64).sum::<f64>() / teachers.len() as f64
}

fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search + filter over the roster. The search term matches case-insensitive
/// substrings of first name, last name, email, or subject; `department` and
/// `status` are exact filters, with `None` matching everything.
pub fn filter_teachers<'a>(
    teachers: &'a [Teacher],
    search_term: &str,
    department: Option<&str>,
    status: Option<TeacherStatus>,
) -> Vec<&'a Teacher> {
    let needle = search_term.to_lowercase();
    teachers
        .iter()
        .filter(|t| {
            let matches_search = contains_lowered(&t.first_name, &needle)
                || contains_lowered(&t.last_name, &needle)
                || contains_lowered(&t.email, &needle)
                || contains_lowered(&t.subject, &needle);
            let matches_department = department.map_or(true, |d| t.department == d);
            let matches_status = status.map_or(true, |s| t.status == s);
            matches_search && matches_department && matches_status
        })
        .collect()
}

/// Search + filter over the payment ledger. The search term matches teacher
/// name, description, or transaction id; absent optional fields never match.
pub fn filter_payments<'a>(
    records: &'a [PaymentRecord],
    search_term: &str,
    status: Option<PaymentStatus>,
    payment_type: Option<PaymentType>,
) -> Vec<&'a PaymentRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            let matches_search = r
                .teacher_name
                .as_deref()
                .is_some_and(|n| contains_lowered(n, &needle))
                || contains_lowered(&r.description, &needle)
                || r.transaction_id
                    .as_ref()
                    .is_some_and(|id| contains_lowered(id.value(), &needle));
            let matches_status = status.map_or(true, |s| r.status == s);
            let matches_type = payment_type.map_or(true, |pt| r.payment_type == pt);
            matches_search && matches_status && matches_type
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{PaymentRecordId, TeacherId, TransactionId};

    fn teacher(id: u64, department: &str, status: TeacherStatus, pending: Option<f64>) -> Teacher {
        Teacher {
            id: TeacherId(id),
            employee_id: format!("EMP{:03}", id),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: format!("sarah{}@school.edu", id),
            phone: "+1 555-0100".to_string(),
            department: department.to_string(),
            subject: "Algebra".to_string(),
            qualification: "M.Ed".to_string(),
            experience: 8,
            join_date: NaiveDate::from_ymd_opt(2019, 8, 15).unwrap(),
            salary: 52000.0,
            status,
            pending_payment: pending,
            last_payment_date: None,
        }
    }

    fn record(
        id: u64,
        amount: f64,
        date: NaiveDate,
        status: PaymentStatus,
        payment_type: PaymentType,
    ) -> PaymentRecord {
        PaymentRecord {
            id: PaymentRecordId(id),
            teacher_id: Some(TeacherId(1)),
            teacher_name: Some("Sarah Johnson".to_string()),
            amount,
            currency: Currency::USD,
            payment_type,
            description: "Monthly salary".to_string(),
            date,
            status,
            transaction_id: Some(TransactionId(format!("TXN{}", id))),
            method: "Credit/Debit Card".to_string(),
        }
    }

    #[test]
    fn active_count_matches_status_tally() {
        let teachers = vec![
            teacher(1, "Math", TeacherStatus::Active, None),
            teacher(2, "Art", TeacherStatus::OnLeave, None),
            teacher(3, "Math", TeacherStatus::Active, None),
            teacher(4, "Science", TeacherStatus::Inactive, None),
        ];
        assert_eq!(active_count(&teachers), 2);
        assert_eq!(on_leave_count(&teachers), 1);
        assert!(active_count(&teachers) <= teachers.len());
        assert_eq!(active_count(&[]), 0);
    }

    #[test]
    fn total_pending_treats_absent_as_zero() {
        let teachers = vec![
            teacher(1, "Math", TeacherStatus::Active, Some(500.0)),
            teacher(2, "Art", TeacherStatus::Active, None),
            teacher(3, "Math", TeacherStatus::Active, Some(250.0)),
        ];
        assert_eq!(total_pending(&teachers), 750.0);
    }

    #[test]
    fn teachers_with_pending_preserves_order() {
        let teachers = vec![
            teacher(1, "Math", TeacherStatus::Active, Some(500.0)),
            teacher(2, "Art", TeacherStatus::Active, Some(0.0)),
            teacher(3, "Math", TeacherStatus::Active, Some(250.0)),
        ];
        let pending = teachers_with_pending(&teachers);
        assert_eq!(
            pending.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TeacherId(1), TeacherId(3)]
        );
        assert_eq!(pending_count(&teachers), 2);
    }

    #[test]
    fn monthly_total_buckets_by_calendar_month() {
        let records = vec![
            record(
                1,
                100.0,
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
            record(
                2,
                200.0,
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Bonus,
            ),
            record(
                3,
                400.0,
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
            // Same month, previous year.
            record(
                4,
                800.0,
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
        ];
        assert_eq!(monthly_total(&records, 2025, 3), 300.0);
        assert_eq!(monthly_total(&records, 2025, 4), 400.0);
        assert_eq!(monthly_total(&records, 2025, 5), 0.0);
    }

    #[test]
    fn recent_payment_count_uses_trailing_week() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let records = vec![
            record(
                1,
                100.0,
                NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
            record(
                2,
                100.0,
                NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
            record(
                3,
                100.0,
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                PaymentStatus::Completed,
                PaymentType::Salary,
            ),
        ];
        assert_eq!(recent_payment_count(&records, today), 2);
    }

    #[test]
    fn averages_are_zero_for_empty_roster() {
        assert_eq!(average_salary(&[]), 0.0);
        assert_eq!(average_experience(&[]), 0.0);
        let teachers = vec![
            teacher(1, "Math", TeacherStatus::Active, None),
            teacher(2, "Art", TeacherStatus::Active, None),
        ];
        assert_eq!(average_salary(&teachers), 52000.0);
        assert_eq!(average_experience(&teachers), 8.0);
    }

    #[test]
    fn filter_teachers_combines_search_and_exact_filters() {
        let mut art = teacher(2, "Art", TeacherStatus::OnLeave, None);
        art.first_name = "Miguel".to_string();
        art.subject = "Sculpture".to_string();
        let teachers = vec![teacher(1, "Math", TeacherStatus::Active, None), art];

        let math_only = filter_teachers(&teachers, "", Some("Math"), None);
        assert_eq!(
            math_only.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![TeacherId(1)]
        );

        // Case-insensitive substring over any of the search fields.
        assert_eq!(filter_teachers(&teachers, "SCULPT", None, None).len(), 1);
        assert_eq!(filter_teachers(&teachers, "johnson", None, None).len(), 2);

        // Filters are AND'ed with the search.
        assert!(filter_teachers(
            &teachers,
            "sculpt",
            None,
            Some(TeacherStatus::Active)
        )
        .is_empty());
    }

    #[test]
    fn filter_teachers_is_idempotent_over_unchanged_input() {
        let teachers = vec![
            teacher(1, "Math", TeacherStatus::Active, None),
            teacher(2, "Art", TeacherStatus::OnLeave, None),
        ];
        let first: Vec<TeacherId> = filter_teachers(&teachers, "sarah", Some("Math"), None)
            .iter()
            .map(|t| t.id)
            .collect();
        let second: Vec<TeacherId> = filter_teachers(&teachers, "sarah", Some("Math"), None)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn filter_payments_matches_optional_fields_gracefully() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut system = record(2, 50.0, date, PaymentStatus::Pending, PaymentType::Other);
        system.teacher_name = None;
        system.transaction_id = None;
        system.description = "Projector replacement".to_string();
        let records = vec![
            record(1, 100.0, date, PaymentStatus::Completed, PaymentType::Salary),
            system,
        ];

        assert_eq!(filter_payments(&records, "sarah", None, None).len(), 1);
        assert_eq!(filter_payments(&records, "projector", None, None).len(), 1);
        assert_eq!(filter_payments(&records, "txn1", None, None).len(), 1);
        assert_eq!(
            filter_payments(&records, "", Some(PaymentStatus::Pending), None).len(),
            1
        );
        assert_eq!(
            filter_payments(&records, "", None, Some(PaymentType::Salary)).len(),
            1
        );
        assert!(filter_payments(
            &records,
            "projector",
            Some(PaymentStatus::Completed),
            None
        )
        .is_empty());
    }
}
