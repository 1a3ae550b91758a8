use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::domain::LibraryAsset;

fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.library, state.publisher)
}

#[derive(Debug, Serialize)]
pub(crate) struct LibraryInfoResponse {
    pub name: String,
    pub address: String,
    pub library_type: String,
    pub info: String,
    pub books: usize,
    pub readers: usize,
    pub active_loans: usize,
    pub library_count: usize,
}

pub(crate) async fn library_info(
    State(state): State<AppState>) -> Json<LibraryInfoResponse> {
    let library = state.library.lock().await;
    Json(LibraryInfoResponse {
        name: library.name().to_string(),
        address: library.address().to_string(),
        library_type: library.library_type().to_string(),
        info: library.display_info(),
        books: library.book_count(),
        readers: library.reader_count(),
        active_loans: library.list_loans().len(),
        library_count: state.registry.library_count(),
    })
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let svc = build_service(state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let svc = build_service(state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
