mod entry_kind;
mod history_entry;
mod report;
mod transaction;

pub use entry_kind::EntryKind;
pub use history_entry::HistoryEntry;
pub use report::BudgetReport;
pub use transaction::Transaction;
