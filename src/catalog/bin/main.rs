include!("../../lib.rs");
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_isbn, library_info, list_books, remove_book};
use crate::catalog::registry::LibraryRegistry;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;
use crate::loans::controller::{lend_book, list_loans, list_overdue_loans, return_book};
use crate::readers::controller::{add_reader, find_reader_by_id, list_readers, remove_reader};
use crate::utils::logging::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let addr: SocketAddr = config.bind_address.parse()?;
    let registry = Arc::new(LibraryRegistry::new());
    let state = AppState::new(config, registry, GatewayPublisherVia::Logs);

    let app = Router::new()
        .route("/library", get(library_info))
        .route("/catalog", post(add_book).get(list_books))
        .route("/catalog/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .route("/readers", post(add_reader).get(list_readers))
        .route("/readers/:id",
               get(find_reader_by_id).delete(remove_reader))
        .route("/loans", post(lend_book).get(list_loans))
        .route("/loans/return", post(return_book))
        .route("/loans/overdue", get(list_overdue_loans))
        .with_state(state);

    tracing::info!(%addr, "library server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
