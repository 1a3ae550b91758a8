use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{AuthorDto, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: AuthorDto,
    #[serde(default)]
    pub(crate) genre: String,
    pub(crate) quantity: i64,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: AuthorDto, genre: &str, quantity: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author,
            genre: genre.to_string(),
            quantity,
        }
    }
    pub fn build_book(&self) -> BookDto {
        let mut book = BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.clone(), self.quantity);
        book.genre = self.genre.to_string();
        book
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
