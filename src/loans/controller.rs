use axum::{
    extract::State,
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::loans::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest, LendBookCommandResponse};
use crate::loans::command::list_loans_cmd::{ListLoansCommand, ListLoansCommandRequest, ListLoansCommandResponse};
use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::loans::domain::LoanService;
use crate::loans::factory;
use crate::utils::date::today;

fn build_service(state: AppState) -> Box<dyn LoanService> {
    factory::create_loan_service(&state.config, state.library, state.publisher)
}

pub(crate) async fn lend_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendBookCommandResponse>, ServerError> {
    let req: LendBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = LendBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_loans(
    State(state): State<AppState>) -> Result<Json<ListLoansCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListLoansCommand::new(svc).execute(ListLoansCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn list_overdue_loans(
    State(state): State<AppState>) -> Result<Json<ListLoansCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListLoansCommand::new(svc).execute(ListLoansCommandRequest::overdue(today())).await?;
    Ok(Json(res))
}
