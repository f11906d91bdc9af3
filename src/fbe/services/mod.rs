mod budget_service;
mod transaction_manager;

pub use budget_service::{BudgetService, BudgetServiceError};
pub use transaction_manager::{ManagerError, TransactionManager};
