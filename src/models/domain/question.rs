use serde::{Deserialize, Serialize};

use crate::models::dto::request::CreateQuestionRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl Question {
    pub fn from_request(id: i64, request: CreateQuestionRequest) -> Self {
        Question {
            id,
            question: request.question,
            answer: request.answer,
            category: request.category,
            difficulty: request.difficulty,
        }
    }
}

/// Selection predicate over stored questions.
///
/// Every repository returns matches in ascending `id` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub search_term: Option<String>,
    pub category: Option<i64>,
    pub exclude_ids: Vec<i64>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn in_category(category: i64) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn quiz(previous_questions: Vec<i64>, category: Option<i64>) -> Self {
        Self {
            search_term: None,
            category,
            exclude_ids: previous_questions,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        if let Some(term) = &self.search_term {
            if !question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }

        !self.exclude_ids.contains(&question.id)
    }
}
