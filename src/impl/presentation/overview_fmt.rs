use iso_currency::Currency;

use super::utils::format_amount;
use crate::domain::logic::session::OverviewStats;

pub(crate) struct OverviewPrinter;

impl OverviewPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Compact single-line summary (sidebar-style badges).
    pub(crate) fn print_summary_line(&self, stats: &OverviewStats, currency: Currency) -> String {
        format!(
            "{} teachers ({} active) | {} pending ({}) | {} this month",
            stats.teacher_count,
            stats.active_count,
            stats.pending_count,
            format_amount(stats.total_pending, currency),
            format_amount(stats.monthly_total, currency),
        )
    }

    /// Multi-line overview block for the dashboard and reports views.
    pub(crate) fn print_overview(&self, stats: &OverviewStats, currency: Currency) -> String {
        let mut out = String::new();
        out.push_str(&format!("Teachers:             {}\n", stats.teacher_count));
        out.push_str(&format!("  Active:             {}\n", stats.active_count));
        out.push_str(&format!("  On leave:           {}\n", stats.on_leave_count));
        out.push_str(&format!(
            "  Awaiting payment:   {}\n",
            stats.pending_count
        ));
        out.push_str(&format!(
            "Pending total:        {}\n",
            format_amount(stats.total_pending, currency)
        ));
        out.push_str(&format!("Payment records:      {}\n", stats.record_count));
        out.push_str(&format!(
            "  This month:         {}\n",
            format_amount(stats.monthly_total, currency)
        ));
        out.push_str(&format!(
            "  Last 7 days:        {}\n",
            stats.recent_payment_count
        ));
        out.push_str(&format!(
            "Average salary:       {}\n",
            format_amount(stats.average_salary, currency)
        ));
        out.push_str(&format!(
            "Average experience:   {:.1} years\n",
            stats.average_experience
        ));
        out
    }
}
