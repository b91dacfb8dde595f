use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use spendwise_core::categories::{Category, CategoryUpdate, NewCategory};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_categories(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories(&user.id)?;
    Ok(Json(categories))
}

async fn create_category(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let created = state
        .category_service
        .create_category(&user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_category(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CategoryUpdate>,
) -> ApiResult<Json<Category>> {
    let updated = state
        .category_service
        .update_category(&user.id, &id, payload)
        .await?;
    Ok(Json(updated))
}

async fn delete_category(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.category_service.delete_category(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            delete(delete_category).put(update_category),
        )
}
