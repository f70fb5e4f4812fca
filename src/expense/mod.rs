//! Everything to do with expenses:
//! - The `Expense` model and the database functions for storing, listing and deleting expenses
//! - The form for submitting an expense and its validation
//! - The route handlers for the expense pages and endpoints

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod form;
mod list_page;

pub use self::core::{
    DEFAULT_CATEGORY, Expense, NewExpense, create_expense_table, delete_expense, insert_expense,
    list_expenses,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_new_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use form::{ExpenseForm, ValidationError};
pub use list_page::get_expenses_page;
