use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::domain::Ingredient;

pub const DEFAULT_PAGE: i64 = 1;

/// `?page=&currentCategory=`. Values that are not integers fall back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn current_category(&self) -> i64 {
        self.current_category
            .as_deref()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,

    #[validate(length(min = 1, max = 1000))]
    pub answer: String,

    #[validate(range(min = 1))]
    pub category: i64,

    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category restriction of the quiz; id `0` means all categories.
    pub fn category(&self) -> Option<Option<i64>> {
        self.quiz_category
            .as_ref()
            .map(|c| if c.id == 0 { None } else { Some(c.id) })
    }
}

/// A recipe arrives either as one ingredient or as a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    #[validate(length(min = 1, max = 80))]
    pub title: String,

    pub recipe: RecipeInput,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, max = 80))]
    pub title: Option<String>,

    pub recipe: Option<RecipeInput>,
}

// the trivia frontend sends category ids as object keys, i.e. strings
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(value) => value
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid category id '{}'", value))),
    }
}
