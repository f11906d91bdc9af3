use super::{EntryKind, Transaction};

/// One row of the merged income/expense history view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry<'a> {
    pub kind: EntryKind,
    pub transaction: &'a Transaction,
}
