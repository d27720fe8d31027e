use async_trait::async_trait;
use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutCartCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutCartCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct CheckoutCartCommandRequest {}


#[derive(Debug, Serialize)]
pub struct CheckoutCartCommandResponse {
    pub success: bool,
    pub message: String,
}

impl CheckoutCartCommandResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            message: "Checkout successful!".to_string(),
        }
    }
}

impl Default for CheckoutCartCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<CheckoutCartCommandRequest, CheckoutCartCommandResponse> for CheckoutCartCommand {
    async fn execute(&self, _req: CheckoutCartCommandRequest) -> Result<CheckoutCartCommandResponse, CommandError> {
        self.checkout_service.checkout()
            .await.map_err(CommandError::from).map(|_| CheckoutCartCommandResponse::new())
    }
}
