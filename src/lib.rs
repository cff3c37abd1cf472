pub mod action;
pub mod bank;
pub mod email;
pub mod extractors;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod store;

use axum::Router;

use services::quiz::QuizService;

#[derive(Clone)]
pub struct AppState {
    pub quiz: QuizService,
}

impl AppState {
    pub fn new(bank: bank::QuestionBank) -> Self {
        Self {
            quiz: QuizService::new(store::SessionStore::new(), bank),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::dispatch::routes())
        .merge(handlers::health::routes())
        .with_state(state)
}
