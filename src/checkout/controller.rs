use axum::{
    extract::State,
    response::Json,
};
use crate::checkout::command::checkout_cart_cmd::{CheckoutCartCommand, CheckoutCartCommandRequest, CheckoutCartCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, &state.store)
}

pub async fn checkout_cart(
    State(state): State<AppState>) -> Result<Json<CheckoutCartCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = CheckoutCartCommand::new(svc).execute(CheckoutCartCommandRequest::default()).await?;
    Ok(Json(res))
}
