//! Trivia endpoint routes. Each method router falls back to the 405 envelope
//! so an unsupported verb on a known path stays inside the error taxonomy.

use super::method_not_allowed;
use crate::handlers::{
    create_question, delete_question, list_categories, list_questions, play_quiz,
    questions_by_category, search_questions,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn trivia_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(questions_by_category).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(list_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(delete_question).fallback(method_not_allowed),
        )
        .route("/add", post(create_question).fallback(method_not_allowed))
        .route("/quizzes", post(play_quiz).fallback(method_not_allowed))
        .with_state(state)
}
