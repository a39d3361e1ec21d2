//! Database entities and request payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A trivia question. All content columns are nullable: question creation
/// accepts partial bodies and stores missing fields as NULL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// A question category. Read-only through the API.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub name: String,
}

/// Body of `POST /add`. Every field is optional; absent fields become NULL.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions/search`. A missing or empty term matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<Value>,
}

impl QuizCategory {
    /// Coerce the client-supplied id to an integer. Accepts a JSON number or
    /// a numeric string, mirroring the frontend which sends both.
    pub fn category_id(&self) -> Option<i32> {
        match self.id.as_ref()? {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quiz_category_id_from_number() {
        let cat: QuizCategory = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(cat.category_id(), Some(3));
    }

    #[test]
    fn quiz_category_id_from_string() {
        let cat: QuizCategory = serde_json::from_value(json!({"id": "5"})).unwrap();
        assert_eq!(cat.category_id(), Some(5));
    }

    #[test]
    fn quiz_category_id_rejects_garbage() {
        let cat: QuizCategory = serde_json::from_value(json!({"id": "Science"})).unwrap();
        assert_eq!(cat.category_id(), None);

        let cat: QuizCategory = serde_json::from_value(json!({"id": null})).unwrap();
        assert_eq!(cat.category_id(), None);

        let cat: QuizCategory = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cat.category_id(), None);
    }

    #[test]
    fn new_question_accepts_partial_body() {
        let q: NewQuestion = serde_json::from_value(json!({"question": "Who?"})).unwrap();
        assert_eq!(q.question.as_deref(), Some("Who?"));
        assert!(q.answer.is_none());
        assert!(q.category.is_none());
        assert!(q.difficulty.is_none());
    }

    #[test]
    fn formatted_question_shape() {
        let q = Question {
            id: 1,
            question: Some("Who?".into()),
            answer: Some("Me".into()),
            category: Some(2),
            difficulty: Some(4),
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(
            v,
            json!({"id": 1, "question": "Who?", "answer": "Me", "category": 2, "difficulty": 4})
        );
    }
}
