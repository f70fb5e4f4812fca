//! The page with the form for adding an expense.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    alert::alert_view,
    endpoints,
    flash::{FlashMessage, take_flash},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

/// Render the form for adding an expense along with any pending flash message,
/// e.g. why the last submission was rejected.
pub async fn get_new_expense_page(jar: PrivateCookieJar) -> Response {
    let (jar, flash) = take_flash(jar);

    (jar, new_expense_view(flash.as_ref())).into_response()
}

fn new_expense_view(flash: Option<&FlashMessage>) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Add Expense" }

            (alert_view(flash))

            (new_expense_form())
        }
    };

    base("Add Expense", &content)
}

fn new_expense_form() -> Markup {
    html! {
        form method="post" action=(endpoints::NEW_EXPENSE_VIEW) class="form"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="date"
                    name="date"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Other"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="note" class=(FORM_LABEL_STYLE) { "Note" }

                input
                    id="note"
                    type="text"
                    name="note"
                    placeholder="Optional"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}
