use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {
    pub category: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(category: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
        }
    }
}

// The books endpoint answers with a bare JSON array, so the response is the list itself.
pub type ListBooksCommandResponse = Vec<BookDto>;

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.category.as_deref())
            .await.map_err(CommandError::from)
    }
}
