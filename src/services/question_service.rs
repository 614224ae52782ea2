use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Category, Question, QuestionFilter},
        dto::request::CreateQuestionRequest,
    },
    repositories::{CategoryRepository, QuestionRepository},
    services::pagination::paginate,
};

/// One page of a filtered question listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the whole filtered result set.
    pub total: usize,
}

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    pub async fn list_questions(&self, page: i64) -> AppResult<QuestionPage> {
        self.page_of(&QuestionFilter::all(), page).await
    }

    pub async fn search_questions(
        &self,
        search_term: Option<&str>,
        page: i64,
    ) -> AppResult<QuestionPage> {
        let term = search_term
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("searchTerm is required".to_string()))?;

        self.page_of(&QuestionFilter::search(term), page).await
    }

    pub async fn questions_in_category(&self, category: i64, page: i64) -> AppResult<QuestionPage> {
        self.page_of(&QuestionFilter::in_category(category), page).await
    }

    /// First question, by id, not in `previous_questions` (and in `category`, if given).
    pub async fn next_quiz_question(
        &self,
        previous_questions: Vec<i64>,
        category: Option<i64>,
    ) -> AppResult<Question> {
        let filter = QuestionFilter::quiz(previous_questions, category);

        self.questions
            .find_first(&filter)
            .await?
            .ok_or_else(|| AppError::NotFound("No quiz questions left".to_string()))
    }

    pub async fn get_question(&self, id: i64) -> AppResult<Question> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let id = self.questions.next_id().await?;
        let question = self
            .questions
            .create(Question::from_request(id, request))
            .await?;

        log::info!("Created question {}", question.id);
        Ok(question)
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<()> {
        self.questions.delete(id).await?;
        log::info!("Deleted question {}", id);
        Ok(())
    }

    async fn page_of(&self, filter: &QuestionFilter, page: i64) -> AppResult<QuestionPage> {
        let matches = self.questions.find(filter).await?;
        let questions = paginate(&matches, page);

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} ({} matches)",
                page,
                matches.len()
            )));
        }

        Ok(QuestionPage {
            questions,
            total: matches.len(),
        })
    }
}
