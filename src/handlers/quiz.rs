//! Quiz play: pick a random unseen question from a category.

use crate::error::ApiError;
use crate::models::QuizRequest;
use crate::response;
use crate::service::QuestionService;
use crate::state::AppState;
use axum::{extract::State, Json};
use rand::seq::SliceRandom;
use serde_json::Value;

/// `POST /quizzes`: given the already-asked ids and a category, return one
/// random question not yet asked, or `question: null` once the category is
/// exhausted.
///
/// Exhaustion compares the count of already-asked ids against the category's
/// question count, not the set difference. The empty-candidate guard below
/// covers client-supplied ids from outside the category.
pub async fn play_quiz(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<response::QuizBody>, ApiError> {
    let req: QuizRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid quiz body: {}", e)))?;
    let category_id = req
        .quiz_category
        .as_ref()
        .and_then(|c| c.category_id())
        .ok_or_else(|| ApiError::BadRequest("quiz_category with an integer id is required".into()))?;

    let total = QuestionService::count_in_category(&state.pool, category_id).await?;
    if req.previous_questions.len() as i64 == total {
        return Ok(Json(response::quiz(None)));
    }

    let candidates =
        QuestionService::quiz_candidates(&state.pool, category_id, &req.previous_questions).await?;
    let question = candidates.choose(&mut rand::thread_rng()).cloned();
    Ok(Json(response::quiz(question)))
}
