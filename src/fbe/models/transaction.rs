use crate::ids::TransactionId;

/// A single recorded income or expense event.
///
/// Records are created by a manager's `add` and never mutated or deleted
/// afterwards; there is no update operation anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: i64,
    /// Entry date label, e.g. `2024/01/15(月)`
    pub timestamp: String,
}
