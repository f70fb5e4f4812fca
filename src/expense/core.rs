//! Defines the expense model and its database queries.

use rusqlite::{Connection, Row};
use time::{Date, OffsetDateTime};

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// The category given to expenses that were submitted without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Money that was spent, as recorded by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// When the money was spent.
    pub date: Date,
    /// How much money was spent.
    ///
    /// Zero and negative amounts are allowed, e.g. for refunds.
    pub amount: f64,
    /// What kind of expense this is, e.g. "Groceries" or "Rent".
    pub category: String,
    /// Free text about the expense, may be empty.
    pub note: String,
    /// When the expense was recorded. Set by the server and never changed.
    pub created_at: OffsetDateTime,
}

/// An expense that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// When the money was spent.
    pub date: Date,
    /// How much money was spent.
    pub amount: f64,
    /// What kind of expense this is.
    pub category: String,
    /// Free text about the expense, may be empty.
    pub note: String,
}

impl NewExpense {
    /// Create a new expense with the default category and an empty note.
    pub fn new(date: Date, amount: f64) -> Self {
        Self {
            date,
            amount,
            category: DEFAULT_CATEGORY.to_owned(),
            note: String::new(),
        }
    }

    /// Set the category for the expense.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set the note for the expense.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expenses table if it does not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    // Expenses are always listed by date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date)",
        (),
    )?;

    Ok(())
}

/// Store a new expense, stamping it with the current time.
///
/// No duplicate detection is done, submitting the same expense twice stores it twice.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn insert_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection
        .prepare(
            "INSERT INTO expenses (date, amount, category, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, amount, category, note, created_at",
        )?
        .query_row(
            (
                expense.date,
                expense.amount,
                expense.category,
                expense.note,
                created_at,
            ),
            map_expense_row,
        )
        .map_err(Error::from)
}

/// Get all expenses, ordered by date with the most recent first.
///
/// Expenses on the same date are ordered with the most recently added first.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn list_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, category, note, created_at
             FROM expenses
             ORDER BY date DESC, id DESC",
        )?
        .query_map((), map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, category, note, created_at
             FROM expenses
             WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_expense_row)
        .map_err(Error::from)
}

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Delete the expense with `id`.
///
/// Deleting an expense that does not exist is not an error, zero rows are
/// affected instead.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Map a database row to an [Expense].
///
/// Expects the columns in the order: id, date, amount, category, note, created_at.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        note: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
pub fn count_expenses(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expenses", (), |row| row.get(0))
        .map_err(Error::from)
}
