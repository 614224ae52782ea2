use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Drink,
        dto::request::{CreateDrinkRequest, UpdateDrinkRequest},
    },
    repositories::DrinkRepository,
};

pub struct DrinkService {
    repository: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repository: Arc<dyn DrinkRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_drinks(&self) -> AppResult<Vec<Drink>> {
        let drinks = self.repository.find_all().await?;

        if drinks.is_empty() {
            return Err(AppError::NotFound("No drinks on the menu".to_string()));
        }
        Ok(drinks)
    }

    pub async fn create_drink(&self, request: CreateDrinkRequest) -> AppResult<Drink> {
        request.validate()?;

        let id = self.repository.next_id().await?;
        let drink = Drink::new(id, &request.title, request.recipe.into_ingredients());

        self.repository.create(drink).await
    }

    pub async fn update_drink(&self, id: i64, request: UpdateDrinkRequest) -> AppResult<Drink> {
        request.validate()?;

        let mut drink = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Drink with id '{}' not found", id)))?;

        if let Some(title) = request.title {
            drink.title = title;
        }
        if let Some(recipe) = request.recipe {
            drink.recipe = recipe.into_ingredients();
        }

        self.repository.update(drink).await
    }

    pub async fn delete_drink(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
