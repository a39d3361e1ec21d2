//! Success response envelopes.

use crate::models::Question;
use serde::Serialize;
use std::collections::BTreeMap;

/// id -> name lookup built from all stored categories. Integer keys
/// serialize as JSON object keys (strings).
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Serialize)]
pub struct CategoriesBody {
    pub success: bool,
    pub status: u16,
    pub categories: CategoryMap,
}

/// Page of formatted questions. `categories` is only present on the full
/// listing endpoint; `current_category` is always serialized, always null.
#[derive(Serialize)]
pub struct QuestionsBody {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct AckBody {
    pub success: bool,
    pub status: u16,
}

#[derive(Serialize)]
pub struct QuizBody {
    pub success: bool,
    pub question: Option<Question>,
}

pub fn categories(map: CategoryMap) -> CategoriesBody {
    CategoriesBody {
        success: true,
        status: 200,
        categories: map,
    }
}

pub fn question_page(
    questions: Vec<Question>,
    total_questions: usize,
    categories: Option<CategoryMap>,
) -> QuestionsBody {
    QuestionsBody {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: None,
    }
}

pub fn ack() -> AckBody {
    AckBody {
        success: true,
        status: 200,
    }
}

pub fn quiz(question: Option<Question>) -> QuizBody {
    QuizBody {
        success: true,
        question,
    }
}
