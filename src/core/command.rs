use async_trait::async_trait;
use crate::core::library::ShopError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<ShopError> for CommandError {
    fn from(other: ShopError) -> Self {
        match other {
            ShopError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            ShopError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            ShopError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            ShopError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::ShopError;

    #[tokio::test]
    async fn test_should_convert_shop_error() {
        assert!(matches!(CommandError::from(ShopError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(ShopError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(ShopError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(ShopError::runtime("test", None)), CommandError::Runtime { .. }));
    }
}
