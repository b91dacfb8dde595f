use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use spendwise_core::budgets::Period;
use spendwise_core::expenses::{Expense, ExpenseFilters, NewExpense};
use spendwise_core::users::User;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_expenses(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(filters): Query<ExpenseFilters>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.list_expenses(&user.id, &filters)?;
    Ok(Json(expenses))
}

async fn create_expense(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let created = state.expense_service.create_expense(&user.id, payload).await?;

    // Alert evaluation runs off the request path; a failure here must not
    // fail the expense that was already recorded.
    let period = Period::from_date(created.entry_date);
    evaluate_alerts_in_background(state, user, period);

    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_expense(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn evaluate_alerts_in_background(state: Arc<AppState>, user: User, period: Period) {
    tokio::spawn(async move {
        let snapshot = match state.budget_service.snapshot_for_period(&user.id, &period) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "budget evaluation failed");
                return;
            }
        };
        match state.notification_service.maybe_notify(&user, &snapshot).await {
            Ok(outcome) => {
                if outcome.sent() > 0 {
                    tracing::info!(
                        user_id = %user.id,
                        period = %outcome.period,
                        sent = outcome.sent(),
                        "budget alerts sent"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "alert dispatch failed");
            }
        }
    });
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}
