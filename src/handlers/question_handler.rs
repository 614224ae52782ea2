use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateQuestionRequest, PageParams, QuizRequest, SearchRequest},
        response::{
            category_map, CategoriesResponse, CategoryQuestionsResponse, CreatedResponse,
            DeletedResponse, QuestionListResponse, QuestionResponse, SearchResponse,
        },
    },
};

#[get("/categories")]
pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.question_service.list_categories().await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

#[get("/questions")]
pub async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = state.question_service.list_questions(query.page()).await?;
    let categories = state.question_service.list_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories: category_map(&categories),
        current_category: query.current_category(),
    }))
}

#[get("/questions/{id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(QuestionResponse {
        success: true,
        question,
    }))
}

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.question_service.delete_question(id).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

#[post("/search")]
pub async fn search_questions(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
    request: web::Json<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .question_service
        .search_questions(request.search_term.as_deref(), query.page())
        .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: query.current_category(),
    }))
}

#[get("/categories/{id}/questions")]
pub async fn get_questions_by_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let category = id.into_inner();
    let page = state
        .question_service
        .questions_in_category(category, query.page())
        .await?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        current_category: category,
    }))
}

#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let category = request
        .category()
        .ok_or_else(|| AppError::BadRequest("quiz_category is required".to_string()))?;

    let question = state
        .question_service
        .next_quiz_question(request.previous_questions, category)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionResponse {
        success: true,
        question,
    }))
}
