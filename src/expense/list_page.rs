//! The page listing every expense, most recent first.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::alert_view,
    endpoints,
    expense::core::{Expense, list_expenses},
    flash::take_flash,
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_NUMBER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        TABLE_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the list of expenses along with any pending flash message.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let expenses = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        list_expenses(&connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve expenses: {error}"))?
    };

    let (jar, flash) = take_flash(jar);
    let content = html! {
        (alert_view(flash.as_ref()))
        (expenses_table(&expenses))
    };

    Ok((jar, expenses_view(&content)).into_response())
}

fn expenses_view(content: &Markup) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="page-header"
            {
                h1 { "Expenses" }

                a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                {
                    "Add Expense"
                }
            }

            (content)
        }
    );

    base("Expenses", &content)
}

fn expenses_table(expenses: &[Expense]) -> Markup {
    let table_row = |expense: &Expense| {
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
            {
                td class=(TABLE_CELL_STYLE) { (expense.date) }
                td class=(TABLE_CELL_NUMBER_STYLE) { (format_currency(expense.amount)) }
                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                }
                td class=(TABLE_CELL_STYLE) { (expense.note) }
                td class=(TABLE_CELL_STYLE)
                {
                    form method="post" action=(delete_url)
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        )
    };

    html!(
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Note" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for expense in expenses {
                    (table_row(expense))
                }

                @if expenses.is_empty() {
                    tr
                    {
                        td colspan="5" class="empty-state"
                        {
                            "No expenses recorded yet. "
                            a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                            {
                                "Add your first expense"
                            }
                        }
                    }
                }
            }
        }
    )
}
