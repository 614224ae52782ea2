use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CategoryRepository, DrinkRepository, MongoCategoryRepository, MongoDrinkRepository,
        MongoQuestionRepository, QuestionRepository,
    },
    services::{DrinkService, QuestionService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub drink_service: Arc<DrinkService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let drink_repository = Arc::new(MongoDrinkRepository::new(&db));
        drink_repository.ensure_indexes().await?;

        let category_repository = Arc::new(MongoCategoryRepository::new(&db));

        Ok(Self::from_repositories(
            config,
            question_repository,
            category_repository,
            drink_repository,
        ))
    }

    pub fn from_repositories(
        config: Config,
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        drinks: Arc<dyn DrinkRepository>,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(questions, categories)),
            drink_service: Arc::new(DrinkService::new(drinks)),
            config: Arc::new(config),
        }
    }
}
