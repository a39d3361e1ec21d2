//! Question listing, creation, deletion, and search.

use crate::error::ApiError;
use crate::models::{NewQuestion, SearchRequest};
use crate::pagination::{page_from_query, paginate};
use crate::response;
use crate::service::{CategoryService, QuestionService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// `GET /questions?page=N`: paginated listing plus the full unfiltered count
/// and the category mapping. Empty question store is a miss.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<response::QuestionsBody>, ApiError> {
    let questions = QuestionService::list_all(&state.pool).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound("no questions".into()));
    }
    let categories = CategoryService::mapping(&state.pool).await?;
    let total = questions.len();
    let page = page_from_query(params.get("page"));
    let current = paginate(&questions, page).to_vec();
    Ok(Json(response::question_page(current, total, Some(categories))))
}

/// `DELETE /questions/{id}`: primary-key lookup first, so a missing id is a
/// 404 rather than a silent no-op. The second delete of the same id misses.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<response::AckBody>, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("invalid question id".into()))?;
    QuestionService::find(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("question {}", id)))?;
    QuestionService::delete(&state.pool, id).await?;
    Ok(Json(response::ack()))
}

/// `POST /add`: insert a question. No required-field validation; missing
/// fields are stored as NULL.
pub async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<response::AckBody>, ApiError> {
    let new: NewQuestion = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid question body: {}", e)))?;
    QuestionService::insert(&state.pool, &new).await?;
    Ok(Json(response::ack()))
}

/// `POST /questions/search`: case-insensitive substring match over question
/// text, paginated. A missing term matches everything.
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Result<Json<response::QuestionsBody>, ApiError> {
    let req: SearchRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid search body: {}", e)))?;
    let term = req.search_term.unwrap_or_default();
    let matches = QuestionService::search(&state.pool, &term).await?;
    let total = matches.len();
    let page = page_from_query(params.get("page"));
    let current = paginate(&matches, page).to_vec();
    Ok(Json(response::question_page(current, total, None)))
}
