use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// AuthorDto is a data transfer object for the author of a catalogued book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub biography: String,
}

impl AuthorDto {
    pub fn new(first_name: &str, last_name: &str) -> AuthorDto {
        AuthorDto {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            biography: "".to_string(),
        }
    }
}

// BookDto is a data transfer object for Catalog service. The quantity is signed on the
// wire so that negative counts reach the catalog and are rejected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: AuthorDto,
    pub isbn: String,
    pub genre: String,
    pub quantity: i64,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: AuthorDto, quantity: i64) -> BookDto {
        BookDto {
            title: title.to_string(),
            author,
            isbn: isbn.to_string(),
            genre: "".to_string(),
            quantity,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
