use async_trait::async_trait;
use crate::cart::domain::CartService;
use crate::cart::dto::CartItemDto;
use crate::core::command::{Command, CommandError};

pub struct GetCartCommand {
    cart_service: Box<dyn CartService>,
}

impl GetCartCommand {
    pub fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct GetCartCommandRequest {}

// The cart endpoint answers with a bare JSON array of items.
pub type GetCartCommandResponse = Vec<CartItemDto>;

#[async_trait]
impl Command<GetCartCommandRequest, GetCartCommandResponse> for GetCartCommand {
    async fn execute(&self, _req: GetCartCommandRequest) -> Result<GetCartCommandResponse, CommandError> {
        self.cart_service.get_cart().await.map_err(CommandError::from)
    }
}
