//! Opens the application database and creates its tables.

use std::{fs, path::Path};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// Create the all of the database tables for the application.
///
/// Tables that already exist are left untouched, so this is safe to call on
/// every start up.
///
/// # Errors
/// Returns an error if a table cannot be created or there is some other SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Open the SQLite database at `path` and initialize it.
///
/// The directory containing `path` and the database file are created if they
/// do not exist.
///
/// # Errors
/// Returns an [Error::DatabaseDirectory] if the directory cannot be created,
/// or an [Error::SqlError] if the database cannot be opened or initialized.
pub fn open_database(path: &Path) -> Result<Connection, Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| {
            Error::DatabaseDirectory(parent.display().to_string(), error.to_string())
        })?;
    }

    let connection = Connection::open(path)?;
    initialize(&connection)?;

    Ok(connection)
}
