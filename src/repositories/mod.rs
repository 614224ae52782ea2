pub mod category_repository;
pub mod drink_repository;
pub mod question_repository;

pub use category_repository::{CategoryRepository, MongoCategoryRepository};
pub use drink_repository::{DrinkRepository, MongoDrinkRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use drink_repository::MockDrinkRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
