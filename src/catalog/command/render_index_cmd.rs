use std::path::PathBuf;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::template::{load_template, render_index};

pub struct RenderIndexCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RenderIndexCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RenderIndexCommandRequest {
    pub template: PathBuf,
}

impl RenderIndexCommandRequest {
    pub fn new(template: &str) -> Self {
        Self {
            template: PathBuf::from(template),
        }
    }
}

#[derive(Debug)]
pub struct RenderIndexCommandResponse {
    pub html: String,
}

#[async_trait]
impl Command<RenderIndexCommandRequest, RenderIndexCommandResponse> for RenderIndexCommand {
    async fn execute(&self, req: RenderIndexCommandRequest) -> Result<RenderIndexCommandResponse, CommandError> {
        let template = load_template(req.template.as_path()).await?;
        let books = self.catalog_service.list_books(None).await?;
        Ok(RenderIndexCommandResponse { html: render_index(template.as_str(), &books) })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::render_index_cmd::{RenderIndexCommand, RenderIndexCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn build_cmd() -> RenderIndexCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::in_memory());
        RenderIndexCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_render_index_with_catalog() {
        let path = std::env::temp_dir().join(format!("bookstore-index-{}.html", std::process::id()));
        tokio::fs::write(&path, "<html>{{books}}</html>").await.expect("should write template");

        let res = build_cmd().execute(RenderIndexCommandRequest { template: path.clone() }).await
            .expect("should render");
        let _ = tokio::fs::remove_file(&path).await;

        assert!(res.html.contains("The Great Gatsby"));
        assert!(res.html.contains("Sapiens: A Brief History of Humankind"));
        assert!(res.html.contains("Philosopher&#39;s Stone"));
        assert_eq!(8, res.html.matches("class=\"book-card\"").count());
    }

    #[tokio::test]
    async fn test_should_fail_on_missing_template() {
        let res = build_cmd().execute(RenderIndexCommandRequest::new("missing/index.html")).await;
        assert!(matches!(res, Err(CommandError::Runtime { .. })));
    }
}
