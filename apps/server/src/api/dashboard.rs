use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_core::budgets::Period;
use spendwise_core::reports::ReportModel;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

/// Per-category series for the dashboard chart, index-aligned with `labels`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub spent: Vec<Decimal>,
    pub percent_used: Vec<Option<Decimal>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub report: ReportModel,
    pub chart: ChartData,
}

pub fn parse_period(raw: Option<&str>) -> spendwise_core::Result<Period> {
    match raw {
        Some(value) => value.parse(),
        None => Ok(Period::current()),
    }
}

async fn get_dashboard(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let period = parse_period(query.period.as_deref())?;
    let report = state.report_service.report_for_period(&user, &period)?;

    let chart = ChartData {
        labels: report.rows.iter().map(|r| r.name.clone()).collect(),
        spent: report.rows.iter().map(|r| r.spent).collect(),
        percent_used: report.rows.iter().map(|r| r.percent_used).collect(),
    };

    Ok(Json(DashboardResponse { report, chart }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
