//! Defines the endpoint for adding a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    expense::{core::insert_expense, form::ExpenseForm},
    flash::{FlashMessage, redirect_with_flash},
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for adding an expense.
///
/// Redirects to the expenses view on success, or back to the form with an
/// error message if the form is invalid. Nothing is stored for an invalid form.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    jar: PrivateCookieJar,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, Error> {
    let expense = match form.validate() {
        Ok(expense) => expense,
        Err(error) => {
            tracing::info!("Rejected expense form {form:?}: {error}");

            return Ok(redirect_with_flash(
                jar,
                endpoints::NEW_EXPENSE_VIEW,
                FlashMessage::error(&error.to_string()),
            ));
        }
    };

    let expense = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        insert_expense(expense, &connection)
            .inspect_err(|error| tracing::error!("could not create expense: {error}"))?
    };

    tracing::debug!("Created expense {}", expense.id);

    Ok(redirect_with_flash(
        jar,
        endpoints::EXPENSES_VIEW,
        FlashMessage::success("Expense added."),
    ))
}
