//! Tab-separated ledger export
//!
//! Produces the flat text form of the ledger for spreadsheet paste targets.

use crate::models::Expense;

/// Render the ledger as tab-separated text
///
/// One line per expense in ledger order, `category` then `amount` separated
/// by a tab, lines joined by newline. No header row and no trailing newline,
/// so the output pastes cleanly into a spreadsheet.
///
/// Labels are emitted verbatim: a label containing a tab or newline would
/// corrupt the column layout. The category cap and amount validation keep
/// ordinary panels free of such labels, so no escaping is applied.
pub fn to_tabular_text(expenses: &[Expense]) -> String {
    expenses
        .iter()
        .map(|e| format!("{}\t{}", e.category, e.amount))
        .collect::<Vec<_>>()
        .join("\n")
}
