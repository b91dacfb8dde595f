use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    api::dashboard::{parse_period, PeriodQuery},
    auth::CurrentUser,
    error::ApiResult,
    main_lib::AppState,
    pdf,
};

async fn export_pdf(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<impl IntoResponse> {
    let period = parse_period(query.period.as_deref())?;
    let report = state.report_service.report_for_period(&user, &period)?;
    let bytes = pdf::render_report(&report)?;

    let filename = format!("expense-report-{period}.pdf");
    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export/pdf", get(export_pdf))
}
