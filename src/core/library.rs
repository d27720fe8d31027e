use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ShopError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Raised for failures outside the domain, e.g. a page template that cannot
    // be read from disk or an event that cannot be published.
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl ShopError {
    pub fn not_found(message: &str) -> ShopError {
        ShopError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> ShopError {
        ShopError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> ShopError {
        ShopError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> ShopError {
        ShopError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            ShopError::NotFound { message } => message,
            ShopError::Validation { message, .. } => message,
            ShopError::Serialization { message } => message,
            ShopError::Runtime { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for ShopError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::NotFound { message } => {
                write!(f, "{}", message)
            }
            ShopError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            ShopError::Serialization { message } => {
                write!(f, "{}", message)
            }
            ShopError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for ShopError {}

/// A specialized Result type for the shop services.
pub type ShopResult<T> = Result<T, ShopError>;

/// Category filter value that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "all";

// CartAction is the adjustment requested for a single cart entry.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
    Unknown,
}

impl From<String> for CartAction {
    fn from(s: String) -> Self {
        CartAction::from(s.as_str())
    }
}

impl From<&str> for CartAction {
    fn from(s: &str) -> Self {
        match s {
            "increase" => CartAction::Increase,
            "decrease" => CartAction::Decrease,
            "remove" => CartAction::Remove,
            _ => CartAction::Unknown,
        }
    }
}

impl Display for CartAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CartAction::Increase => write!(f, "increase"),
            CartAction::Decrease => write!(f, "decrease"),
            CartAction::Remove => write!(f, "remove"),
            CartAction::Unknown => write!(f, "unknown"),
        }
    }
}
