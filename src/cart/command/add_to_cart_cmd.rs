use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

pub struct AddToCartCommand {
    cart_service: Box<dyn CartService>,
}

impl AddToCartCommand {
    pub fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddToCartCommandRequest {
    pub book_id: i64,
}

impl AddToCartCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddToCartCommandResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
}

impl AddToCartCommandResponse {
    pub fn new(count: usize) -> Self {
        Self {
            success: true,
            message: "Book added to cart".to_string(),
            count,
        }
    }
}

#[async_trait]
impl Command<AddToCartCommandRequest, AddToCartCommandResponse> for AddToCartCommand {
    async fn execute(&self, req: AddToCartCommandRequest) -> Result<AddToCartCommandResponse, CommandError> {
        self.cart_service.add_to_cart(req.book_id)
            .await.map_err(CommandError::from).map(AddToCartCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::command::add_to_cart_cmd::{AddToCartCommand, AddToCartCommandRequest};
    use crate::cart::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn build_cmd() -> AddToCartCommand {
        let svc = factory::create_cart_service(&Configuration::new("test"), &RepositoryStore::in_memory());
        AddToCartCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_to_cart() {
        let cmd = build_cmd();
        let res = cmd.execute(AddToCartCommandRequest::new(4)).await.expect("should add to cart");
        assert!(res.success);
        assert_eq!("Book added to cart", res.message.as_str());
        assert_eq!(1, res.count);
        let res = cmd.execute(AddToCartCommandRequest::new(4)).await.expect("should add to cart");
        assert_eq!(1, res.count);
    }

    #[tokio::test]
    async fn test_should_fail_add_to_cart_for_unknown_book() {
        let res = build_cmd().execute(AddToCartCommandRequest::new(100)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
