//! Defines the endpoint for deleting an expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints,
    expense::core::delete_expense,
    flash::{FlashMessage, redirect_with_flash},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting an expense, redirects to the expenses view.
///
/// The client is told the expense was deleted whether or not it existed.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let rows_affected = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        delete_expense(expense_id, &connection)
            .inspect_err(|error| tracing::error!("Could not delete expense {expense_id}: {error}"))?
    };

    if rows_affected == 0 {
        tracing::debug!("Tried to delete expense {expense_id}, but it does not exist");
    }

    Ok(redirect_with_flash(
        jar,
        endpoints::EXPENSES_VIEW,
        FlashMessage::success("Deleted."),
    ))
}
