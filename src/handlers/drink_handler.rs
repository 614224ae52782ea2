use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{
        permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS},
        AuthenticatedUser, RequiresAuth,
    },
    errors::AppError,
    models::dto::{
        request::{CreateDrinkRequest, UpdateDrinkRequest},
        response::{DrinkDeletedResponse, DrinkShort, DrinksResponse},
    },
};

#[get("/drinks")]
pub async fn get_drinks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drinks = state.drink_service.list_drinks().await?;

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.into_iter().map(DrinkShort::from).collect(),
    }))
}

#[get("/drinks-detail", wrap = "RequiresAuth::new(GET_DRINKS_DETAIL)")]
pub async fn get_drinks_detail(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drinks = state.drink_service.list_drinks().await?;

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks,
    }))
}

#[post("/drinks", wrap = "RequiresAuth::new(POST_DRINKS)")]
pub async fn create_drink(
    state: web::Data<AppState>,
    request: web::Json<CreateDrinkRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let drink = state.drink_service.create_drink(request.into_inner()).await?;
    log::info!("Drink {} created by {}", drink.id, auth.0.subject());

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![drink],
    }))
}

#[patch("/drinks/{id}", wrap = "RequiresAuth::new(PATCH_DRINKS)")]
pub async fn update_drink(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<UpdateDrinkRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let drink = state
        .drink_service
        .update_drink(id.into_inner(), request.into_inner())
        .await?;
    log::info!("Drink {} updated by {}", drink.id, auth.0.subject());

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![drink],
    }))
}

#[delete("/drinks/{id}", wrap = "RequiresAuth::new(DELETE_DRINKS)")]
pub async fn delete_drink(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.drink_service.delete_drink(id).await?;
    log::info!("Drink {} deleted by {}", id, auth.0.subject());

    Ok(HttpResponse::Ok().json(DrinkDeletedResponse {
        success: true,
        delete: id,
    }))
}
