pub mod drink_service;
pub mod pagination;
pub mod question_service;

pub use drink_service::DrinkService;
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use question_service::{QuestionPage, QuestionService};
