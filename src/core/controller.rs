use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::{ShopError, ShopResult};
use crate::core::repository::RepositoryStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(env_name: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(env_name),
            store,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub const INVALID_BOOK_ID: &str = "Invalid book ID";

// Name/value pairs decoded from a query string or form body, in request order.
pub type FormPairs = Vec<(String, String)>;

// Returns the first value sent for `name`; later repeats are ignored.
pub fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

pub async fn method_not_allowed() -> ServerError {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
}

// Parses a form-encoded book identifier as a base-10 integer.
pub fn parse_book_id(raw: Option<&str>) -> ShopResult<i64> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| ShopError::validation(INVALID_BOOK_ID, Some("invalid_book_id".to_string())))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Runtime { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
