#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, jwk::JwkSet, Algorithm, EncodingKey, Header};
use secrecy::SecretString;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use trivia_cafe_server::{
    app_state::AppState,
    auth::{AuthError, AuthGate, KeySetSource},
    config::Config,
    errors::{AppError, AppResult, PersistenceErrorKind},
    models::domain::{Category, Drink, Ingredient, Question, QuestionFilter},
    repositories::{CategoryRepository, DrinkRepository, QuestionRepository},
};

pub const AUDIENCE: &str = "coffee-shop";
pub const DOMAIN: &str = "test-tenant.auth0.com";
pub const ISSUER: &str = "https://test-tenant.auth0.com/";
pub const KID: &str = "test-key-1";

const PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/test_rsa_private.pem");
const OTHER_PRIVATE_KEY: &[u8] = include_bytes!("../fixtures/other_rsa_private.pem");
const JWKS: &str = include_str!("../fixtures/jwks.json");

/// Builds a test service with the full route table.
macro_rules! init_app {
    ($state:expr, $gate:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .app_data(actix_web::web::Data::new($gate))
                .configure(trivia_cafe_server::handlers::configure)
                .default_service(actix_web::web::to(
                    trivia_cafe_server::handlers::unmatched_route,
                )),
        )
        .await
    };
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
        mongo_db_name: "trivia-cafe-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        auth0_domain: DOMAIN.to_string(),
        api_audience: AUDIENCE.to_string(),
        jwks_url: None,
        jwks_cache_ttl_secs: 600,
        jwks_fetch_timeout_secs: 5,
        jwks_min_refresh_secs: 30,
    }
}

pub struct StaticKeySource {
    fetches: AtomicUsize,
}

impl StaticKeySource {
    pub fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeySetSource for StaticKeySource {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        serde_json::from_str(JWKS).map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
    }
}

pub fn auth_gate() -> AuthGate {
    AuthGate::with_source(&test_config(), Arc::new(StaticKeySource::new()))
}

pub fn claims_with(permissions: &[&str]) -> Value {
    json!({
        "iss": ISSUER,
        "sub": "auth0|barista",
        "aud": AUDIENCE,
        "iat": Utc::now().timestamp(),
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        "permissions": permissions,
    })
}

pub fn sign(claims: &Value) -> String {
    sign_with(claims, KID, PRIVATE_KEY)
}

pub fn sign_with_other_key(claims: &Value) -> String {
    sign_with(claims, KID, OTHER_PRIVATE_KEY)
}

pub fn sign_with(claims: &Value, kid: &str, key: &[u8]) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    encode(&header, claims, &EncodingKey::from_rsa_pem(key).unwrap()).unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn seeded_questions() -> Vec<Question> {
    let rows: [(&str, &str, i64, i32); 15] = [
        ("What is the capital of France?", "Paris", 3, 1),
        ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (question, answer, category, difficulty))| Question {
            id: i as i64 + 1,
            question: question.to_string(),
            answer: answer.to_string(),
            category: *category,
            difficulty: *difficulty,
        })
        .collect()
}

pub fn seeded_categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, kind)| Category::new(i as i64 + 1, kind))
        .collect()
}

pub fn seeded_drinks() -> Vec<Drink> {
    vec![Drink::new(
        1,
        "Latte",
        vec![
            Ingredient {
                name: "Espresso".to_string(),
                color: "brown".to_string(),
                parts: 1,
            },
            Ingredient {
                name: "Milk".to_string(),
                color: "white".to_string(),
                parts: 3,
            },
        ],
    )]
}

pub struct InMemoryQuestionRepository {
    questions: RwLock<BTreeMap<i64, Question>>,
    sequence: AtomicI64,
}

impl InMemoryQuestionRepository {
    pub fn new(seed: Vec<Question>) -> Self {
        let sequence = seed.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            questions: RwLock::new(seed.into_iter().map(|q| (q.id, q)).collect()),
            sequence: AtomicI64::new(sequence),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn find_first(&self, filter: &QuestionFilter) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.values().find(|q| filter.matches(q)).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(&id).cloned())
    }

    async fn next_id(&self) -> AppResult<i64> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::persistence(
                PersistenceErrorKind::ConstraintViolation,
                format!("Question with id '{}' already exists", question.id),
            ));
        }
        questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }
}

pub struct InMemoryCategoryRepository {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

pub struct InMemoryDrinkRepository {
    drinks: RwLock<BTreeMap<i64, Drink>>,
    sequence: AtomicI64,
}

impl InMemoryDrinkRepository {
    pub fn new(seed: Vec<Drink>) -> Self {
        let sequence = seed.iter().map(|d| d.id).max().unwrap_or(0);
        Self {
            drinks: RwLock::new(seed.into_iter().map(|d| (d.id, d)).collect()),
            sequence: AtomicI64::new(sequence),
        }
    }
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        Ok(self.drinks.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        Ok(self.drinks.read().await.get(&id).cloned())
    }

    async fn next_id(&self) -> AppResult<i64> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn create(&self, drink: Drink) -> AppResult<Drink> {
        let mut drinks = self.drinks.write().await;
        if drinks.values().any(|d| d.title == drink.title) {
            return Err(AppError::persistence(
                PersistenceErrorKind::ConstraintViolation,
                format!("Drink titled '{}' already exists", drink.title),
            ));
        }
        drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let mut drinks = self.drinks.write().await;
        if !drinks.contains_key(&drink.id) {
            return Err(AppError::NotFound(format!(
                "Drink with id '{}' not found",
                drink.id
            )));
        }
        drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut drinks = self.drinks.write().await;
        drinks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Drink with id '{}' not found", id)))
    }
}

pub fn app_state_with(questions: Vec<Question>, drinks: Vec<Drink>) -> AppState {
    AppState::from_repositories(
        test_config(),
        Arc::new(InMemoryQuestionRepository::new(questions)),
        Arc::new(InMemoryCategoryRepository::new(seeded_categories())),
        Arc::new(InMemoryDrinkRepository::new(drinks)),
    )
}

pub fn seeded_app_state() -> AppState {
    app_state_with(seeded_questions(), seeded_drinks())
}
