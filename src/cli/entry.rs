//! Interactive expense-entry session
//!
//! The terminal counterpart of the original click-a-category panel: a
//! numbered category menu, one pending amount prompt at a time, and a
//! datasheet printed when the session ends. Input and output are generic so
//! the whole loop is testable without a terminal.

use std::io::{BufRead, Write};

use crate::display::{format_category_menu, format_ledger_table};
use crate::error::{KakeiboError, KakeiboResult};
use crate::export::to_tabular_text;
use crate::services::{CategoryStore, ExpenseLedger, SelectionController};

/// Run an entry session until `done` or end of input
///
/// Returns the session ledger so the caller can reuse it (e.g. for tests or
/// a final export).
pub fn run_entry_session<R: BufRead, W: Write>(
    store: &CategoryStore,
    input: R,
    out: &mut W,
) -> KakeiboResult<ExpenseLedger> {
    let mut ledger = ExpenseLedger::new();
    let mut controller = SelectionController::new();

    writeln!(out, "Expense entry panel")?;
    writeln!(out, "Pick a category by number, then enter the amount.")?;
    writeln!(
        out,
        "Commands: 'sheet' shows the datasheet, 'clear' empties it, 'done' finishes.\n"
    )?;
    write!(out, "{}", format_category_menu(store.categories()))?;

    let mut lines = input.lines();
    loop {
        match controller.pending_category() {
            Some(category) => write!(out, "\nAmount for {} (blank to cancel): ", category)?,
            None => write!(out, "\nCategory number (or command): ")?,
        }
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            // End of input resolves any pending capture by cancelling it
            None => break,
        };
        let line = line.trim();

        if controller.pending_category().is_some() {
            if line.is_empty() {
                controller.cancel();
                writeln!(out, "Cancelled.")?;
                continue;
            }

            let amount = line
                .parse::<i64>()
                .map_err(|_| KakeiboError::invalid_amount(line));
            match amount.and_then(|a| controller.confirm(&mut ledger, a)) {
                Ok(expense) => {
                    writeln!(out, "Recorded {} {}", expense.category, expense.amount)?;
                }
                Err(e) if e.is_invalid_amount() => {
                    // Capture stays open; re-prompt
                    writeln!(out, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
            continue;
        }

        match line {
            "" => {}
            "done" | "d" | "q" | "quit" => break,
            "sheet" | "s" => {
                writeln!(out, "{}", format_ledger_table(ledger.all()))?;
            }
            "clear" => {
                ledger.clear();
                writeln!(out, "Datasheet cleared.")?;
            }
            "list" | "menu" => {
                write!(out, "{}", format_category_menu(store.categories()))?;
            }
            _ => match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= store.categories().len() => {
                    let label = store.categories()[n - 1].label.clone();
                    controller.select(&label)?;
                }
                _ => {
                    writeln!(
                        out,
                        "Enter a number between 1 and {}, or a command.",
                        store.categories().len()
                    )?;
                }
            },
        }
    }

    writeln!(out, "\n{}", format_ledger_table(ledger.all()))?;
    if !ledger.is_empty() {
        writeln!(out, "\nSpreadsheet data (TSV):")?;
        writeln!(out, "{}", to_tabular_text(ledger.all()))?;
    }

    Ok(ledger)
}
