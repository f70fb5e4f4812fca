//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expenses_page,
        get_new_expense_page,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(
            endpoints::NEW_EXPENSE_VIEW,
            get(get_new_expense_page).post(create_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, post(delete_expense_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        AppState, endpoints,
        expense::{ExpenseForm, list_expenses},
    };

    use super::build_router;

    fn get_test_server() -> (TestServer, AppState) {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "42").unwrap();
        let server = TestServer::new(build_router(state.clone()));

        (server, state)
    }

    fn form(date: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            date: date.to_owned(),
            amount: amount.to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn pages_render() {
        let (server, _) = get_test_server();

        server.get(endpoints::EXPENSES_VIEW).await.assert_status_ok();
        server
            .get(endpoints::NEW_EXPENSE_VIEW)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn add_then_delete_expense() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::NEW_EXPENSE_VIEW)
            .form(&form("2024-01-05", "12.50"))
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::EXPENSES_VIEW);

        let expense = {
            let connection = state.db_connection.lock().unwrap();
            let expenses = list_expenses(&connection).unwrap();
            assert_eq!(expenses.len(), 1);
            assert_eq!(expenses[0].date, date!(2024 - 01 - 05));
            assert_eq!(expenses[0].category, "Other");
            expenses[0].clone()
        };

        let page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert!(page.contains("$12.50"), "list page should show the new expense");

        let response = server
            .post(&endpoints::format_endpoint(
                endpoints::DELETE_EXPENSE,
                expense.id,
            ))
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::EXPENSES_VIEW);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_expenses(&connection), Ok(vec![]));
    }

    #[tokio::test]
    async fn invalid_form_redirects_back_to_form() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::NEW_EXPENSE_VIEW)
            .form(&form("2024-02-01", "free"))
            .await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::NEW_EXPENSE_VIEW);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_expenses(&connection), Ok(vec![]));
    }

    #[tokio::test]
    async fn delete_with_malformed_id_is_rejected() {
        let (server, _) = get_test_server();

        server
            .post("/delete/abc")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_requires_post() {
        let (server, _) = get_test_server();

        server
            .get("/delete/1")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = get_test_server();

        server
            .get("/does/not/exist")
            .await
            .assert_status_not_found();
    }
}
