use axum::{
    extract::{Query, State},
    response::{Html, Json},
};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::render_index_cmd::{RenderIndexCommand, RenderIndexCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, first_value, FormPairs, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, &state.store)
}

pub async fn index(
    State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let req = RenderIndexCommandRequest::new(state.config.index_template.as_str());
    let svc = build_service(&state);
    let res = RenderIndexCommand::new(svc).execute(req).await?;
    Ok(Html(res.html))
}

pub async fn list_books(
    State(state): State<AppState>,
    query: Option<Query<FormPairs>>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    // a repeated category resolves to its first value
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let req = ListBooksCommandRequest::new(first_value(&pairs, "category"));
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
