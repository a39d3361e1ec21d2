//! Category endpoints.

use crate::error::ApiError;
use crate::response;
use crate::service::{CategoryService, QuestionService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// `GET /categories`: the full id -> name mapping. Empty store is a miss.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<response::CategoriesBody>, ApiError> {
    let map = CategoryService::mapping(&state.pool).await?;
    if map.is_empty() {
        return Err(ApiError::NotFound("no categories".into()));
    }
    Ok(Json(response::categories(map)))
}

/// `GET /categories/{id}/questions`: every question in the category,
/// unpaginated, total equal to the filtered count.
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<response::QuestionsBody>, ApiError> {
    let category_id: i32 = category_id
        .parse()
        .map_err(|_| ApiError::BadRequest("invalid category id".into()))?;
    let questions = QuestionService::by_category(&state.pool, category_id).await?;
    let total = questions.len();
    Ok(Json(response::question_page(questions, total, None)))
}
