use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::cart::dto::CartItemDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::CartAction;

pub struct UpdateCartCommand {
    cart_service: Box<dyn CartService>,
}

impl UpdateCartCommand {
    pub fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartCommandRequest {
    pub book_id: i64,
    pub action: CartAction,
}

impl UpdateCartCommandRequest {
    pub fn new(book_id: i64, action: &str) -> Self {
        Self {
            book_id,
            action: CartAction::from(action),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateCartCommandResponse {
    pub success: bool,
    pub cart: Vec<CartItemDto>,
}

impl UpdateCartCommandResponse {
    pub fn new(cart: Vec<CartItemDto>) -> Self {
        Self {
            success: true,
            cart,
        }
    }
}

#[async_trait]
impl Command<UpdateCartCommandRequest, UpdateCartCommandResponse> for UpdateCartCommand {
    async fn execute(&self, req: UpdateCartCommandRequest) -> Result<UpdateCartCommandResponse, CommandError> {
        self.cart_service.update_cart(req.book_id, req.action)
            .await.map_err(CommandError::from).map(UpdateCartCommandResponse::new)
    }
}
