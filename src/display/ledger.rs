//! Ledger display formatting
//!
//! Formats the recorded expenses as the datasheet table shown at the end of
//! an entry session.

use crate::models::Expense;

/// Format an amount with thousands separators
pub fn format_amount(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format the ledger as a two-column datasheet table
pub fn format_ledger_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let mut output = String::new();
    output.push_str("Category\tAmount\n");
    output.push_str("--------\t------\n");

    let mut total: i64 = 0;
    for expense in expenses {
        total += expense.amount;
        output.push_str(&format!(
            "{}\t{}\n",
            expense.category,
            format_amount(expense.amount)
        ));
    }

    output.push_str(&format!("Total\t{}", format_amount(total)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ExpenseLedger;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(300), "300");
        assert_eq!(format_amount(1200), "1,200");
        assert_eq!(format_amount(65000), "65,000");
        assert_eq!(format_amount(1234567), "1,234,567");
    }

    #[test]
    fn test_table_has_rows_and_total() {
        let mut ledger = ExpenseLedger::new();
        ledger.add("食費", 1200).unwrap();
        ledger.add("交通費", 300).unwrap();

        let table = format_ledger_table(ledger.all());
        assert!(table.contains("食費\t1,200"));
        assert!(table.contains("交通費\t300"));
        assert!(table.ends_with("Total\t1,500"));
    }

    #[test]
    fn test_empty_ledger_message() {
        assert_eq!(format_ledger_table(&[]), "No expenses recorded yet.");
    }
}
