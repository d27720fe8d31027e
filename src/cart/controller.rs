use std::convert::Infallible;
use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Form, FromRequest, FromRequestParts, Multipart, Query, State},
    http::{header, Request},
    response::Json,
};
use crate::cart::command::add_to_cart_cmd::{AddToCartCommand, AddToCartCommandRequest, AddToCartCommandResponse};
use crate::cart::command::get_cart_cmd::{GetCartCommand, GetCartCommandRequest, GetCartCommandResponse};
use crate::cart::command::update_cart_cmd::{UpdateCartCommand, UpdateCartCommandRequest, UpdateCartCommandResponse};
use crate::cart::domain::CartService;
use crate::cart::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, first_value, FormPairs, parse_book_id, ServerError};

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

// Form fields posted by the storefront. Values stay raw strings so a malformed
// identifier is reported as a bad book id rather than a generic form error.
#[derive(Debug, Default)]
pub struct CartForm {
    pub book_id: Option<String>,
    pub action: Option<String>,
}

impl CartForm {
    fn from_pairs(pairs: &[(String, String)]) -> CartForm {
        CartForm {
            book_id: first_value(pairs, "bookId").map(str::to_string),
            action: first_value(pairs, "action").map(str::to_string),
        }
    }
}

// Fields are looked up in urlencoded body values, then the query string, then
// multipart values. A body that cannot be decoded contributes nothing.
#[async_trait]
impl<S> FromRequest<S, Body> for CartForm
    where S: Send + Sync {
    type Rejection = Infallible;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let query: FormPairs = Query::<FormPairs>::from_request_parts(&mut parts, state).await
            .map(|Query(pairs)| pairs).unwrap_or_default();
        let content_type = parts.headers.get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()).unwrap_or_default().to_ascii_lowercase();
        let req = Request::from_parts(parts, body);

        let mut pairs = FormPairs::new();
        if content_type.starts_with(URLENCODED) {
            if let Ok(Form(body)) = Form::<FormPairs>::from_request(req, state).await {
                pairs.extend(body);
            }
            pairs.extend(query);
        } else if content_type.starts_with(MULTIPART) {
            pairs.extend(query);
            if let Ok(multipart) = Multipart::from_request(req, state).await {
                pairs.extend(read_multipart(multipart).await);
            }
        } else {
            pairs.extend(query);
        }
        Ok(CartForm::from_pairs(&pairs))
    }
}

// file parts are skipped; a malformed part ends the read
async fn read_multipart(mut multipart: Multipart) -> FormPairs {
    let mut pairs = FormPairs::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.file_name().is_some() {
            continue;
        }
        let name = field.name().unwrap_or_default().to_string();
        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(_) => break,
        }
    }
    pairs
}

fn build_service(state: &AppState) -> Box<dyn CartService> {
    factory::create_cart_service(&state.config, &state.store)
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    form: CartForm) -> Result<Json<AddToCartCommandResponse>, ServerError> {
    let book_id = parse_book_id(form.book_id.as_deref()).map_err(CommandError::from)?;
    let req = AddToCartCommandRequest::new(book_id);
    let svc = build_service(&state);
    let res = AddToCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn get_cart(
    State(state): State<AppState>) -> Result<Json<GetCartCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = GetCartCommand::new(svc).execute(GetCartCommandRequest::default()).await?;
    Ok(Json(res))
}

pub async fn update_cart(
    State(state): State<AppState>,
    form: CartForm) -> Result<Json<UpdateCartCommandResponse>, ServerError> {
    let book_id = parse_book_id(form.book_id.as_deref()).map_err(CommandError::from)?;
    let req = UpdateCartCommandRequest::new(book_id, form.action.as_deref().unwrap_or_default());
    let svc = build_service(&state);
    let res = UpdateCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
