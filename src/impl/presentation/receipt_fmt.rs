use crate::entities::PaymentRecord;

use super::utils::format_amount;

const RECEIPT_WIDTH: usize = 72;

pub(crate) struct ReceiptPrinter;

impl ReceiptPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Render one ledger entry as a plain-text receipt block.
    pub(crate) fn print_receipt(&self, record: &PaymentRecord) -> String {
        let mut out = String::new();

        out.push_str(&format!("{:-^RECEIPT_WIDTH$}\n", " PAYMENT RECEIPT "));
        out.push_str(&format!("Receipt:      {}\n", record.id));
        out.push_str(&format!("Date:         {}\n", record.date.format("%Y-%m-%d")));
        out.push_str(&format!("Paid to:      {}\n", record.display_name()));
        out.push_str(&format!("Type:         {}\n", record.payment_type));
        out.push_str(&format!("Method:       {}\n", record.method));
        if let Some(txn) = &record.transaction_id {
            out.push_str(&format!("Transaction:  {}\n", txn));
        }
        out.push_str(&format!(
            "Amount:       {}\n",
            format_amount(record.amount, record.currency)
        ));
        out.push_str(&format!("Status:       {}\n", record.status));

        if !record.description.is_empty() {
            out.push_str("\n");
            for line in textwrap::wrap(&record.description, RECEIPT_WIDTH) {
                out.push_str(&line);
                out.push('\n');
            }
        }

        out.push_str(&format!("{:-^RECEIPT_WIDTH$}\n", ""));
        out
    }
}
