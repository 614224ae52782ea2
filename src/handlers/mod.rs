pub mod drink_handler;
pub mod health_handler;
pub mod question_handler;

use actix_web::{dev::ResourceDef, error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::errors::AppError;

pub use drink_handler::{create_drink, delete_drink, get_drinks, get_drinks_detail, update_drink};
pub use health_handler::health_check;
pub use question_handler::{
    create_question, delete_question, get_categories, get_question, get_questions,
    get_questions_by_category, play_quiz, search_questions,
};

/// Every path served by [`configure`], used to tell a wrong method from an unknown path.
const ROUTE_PATTERNS: [&str; 10] = [
    "/health",
    "/categories",
    "/categories/{id}/questions",
    "/questions",
    "/questions/{id}",
    "/search",
    "/quizzes",
    "/drinks",
    "/drinks-detail",
    "/drinks/{id}",
];

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(health_check)
        .service(get_categories)
        .service(get_questions)
        .service(get_question)
        .service(create_question)
        .service(delete_question)
        .service(search_questions)
        .service(get_questions_by_category)
        .service(play_quiz)
        .service(get_drinks)
        .service(get_drinks_detail)
        .service(create_drink)
        .service(update_drink)
        .service(delete_drink);
}

/// Syntactically broken bodies are 400; well-formed JSON of the wrong shape is 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_err = match &err {
            JsonPayloadError::Deserialize(e) if e.is_data() => {
                AppError::ValidationError(e.to_string())
            }
            _ => AppError::BadRequest(err.to_string()),
        };
        app_err.into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Ids that do not parse address no resource.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(err.to_string()).into())
}

/// Default service: 405 for a known path requested with another method, 404 otherwise.
pub async fn unmatched_route(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let known_path = ROUTE_PATTERNS
        .iter()
        .any(|pattern| ResourceDef::new(*pattern).is_match(req.path()));

    if known_path {
        return Err(AppError::MethodNotAllowed(format!(
            "{} {}",
            req.method(),
            req.path()
        )));
    }
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}
