use serde::{Deserialize, Serialize};

/// Summary row written to stdout after a replay: totals and balance as
/// display-formatted yen strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BudgetReport {
    pub income_total: String,
    pub expense_total: String,
    pub balance: String,
}
