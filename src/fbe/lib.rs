pub mod calendar;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod result;
pub mod services;
pub mod validation;

pub use money::{
    format_money, format_money_for_display, format_money_for_input, is_safe_amount,
    parse_money_string, MoneyError, MoneyFormatOptions, MAX_SAFE_AMOUNT,
};
pub use models::BudgetReport;
pub use result::Result;

pub fn build_budget_service() -> services::BudgetService {
    let incomes = services::TransactionManager::new(models::EntryKind::Income);
    let expenses = services::TransactionManager::new(models::EntryKind::Expense);
    let budget_service = services::BudgetService::new(incomes, expenses);

    budget_service
}
