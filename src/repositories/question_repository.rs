use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneOptions, FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionFilter},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions matching `filter`, ascending by id.
    async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>>;
    /// Lowest-id question matching `filter`.
    async fn find_first(&self, filter: &QuestionFilter) -> AppResult<Option<Question>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    async fn next_id(&self) -> AppResult<i64>;
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1, "id": 1 })
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(category_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

fn filter_document(filter: &QuestionFilter) -> Document {
    let mut document = Document::new();

    if let Some(term) = &filter.search_term {
        document.insert(
            "question",
            doc! { "$regex": regex::escape(term), "$options": "i" },
        );
    }
    if let Some(category) = filter.category {
        document.insert("category", category);
    }
    if !filter.exclude_ids.is_empty() {
        document.insert("id", doc! { "$nin": filter.exclude_ids.clone() });
    }

    document
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self
            .collection
            .find(filter_document(filter))
            .with_options(find_options)
            .await?;
        let items: Vec<Question> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn find_first(&self, filter: &QuestionFilter) -> AppResult<Option<Question>> {
        let options = FindOneOptions::builder().sort(doc! { "id": 1 }).build();

        let question = self
            .collection
            .find_one(filter_document(filter))
            .with_options(options)
            .await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn next_id(&self) -> AppResult<i64> {
        self.db.next_sequence("questions").await
    }

    async fn create(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
