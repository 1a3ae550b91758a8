use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::{AuthorEntity, BookEntity};
use crate::books::dto::{AuthorDto, BookDto};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::Configuration;
use crate::core::events::{BOOK_ADDED, BOOK_REMOVED, DomainEvent};
use crate::core::library::{LibraryError, LibraryResult, log_failure};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    library: SharedLibrary,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, library: SharedLibrary,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            library,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::try_from(book).map_err(|e| log_failure("add_book", e))?;
        let added = BookDto::from(&entity);
        self.library.lock().await.add_book(entity).map_err(|e| log_failure("add_book", e))?;
        self.events_publisher.publish_or_log(DomainEvent::added(
            BOOK_ADDED, "catalog", added.isbn.as_str(), &HashMap::new(), &added)).await;
        Ok(added)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let removed = self.library.lock().await.remove_book(isbn)
            .map(|b| BookDto::from(&b))
            .map_err(|e| log_failure("remove_book", e))?;
        self.events_publisher.publish_or_log(DomainEvent::deleted(
            BOOK_REMOVED, "catalog", isbn, &HashMap::new(), &removed)).await;
        Ok(removed)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.library.lock().await.find_book(isbn)
            .map(BookDto::from)
            .map_err(|e| log_failure("find_book", e))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let library = self.library.lock().await;
        Ok(library.list_books().into_iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title().to_string(),
            author: AuthorDto::from(other.author()),
            isbn: other.isbn().to_string(),
            genre: other.genre().to_string(),
            quantity: i64::from(other.quantity()),
        }
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
            biography: other.biography.to_string(),
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> Self {
        AuthorEntity::new(other.first_name.as_str(), other.last_name.as_str())
            .with_biography(other.biography.as_str())
    }
}

impl TryFrom<&BookDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        BookEntity::new(other.title.as_str(), AuthorEntity::from(&other.author),
                        other.isbn.as_str(), other.genre.as_str(), other.quantity)
    }
}


#[cfg(test)]
mod tests {
    use crate::books::dto::{AuthorDto, BookDto};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::model::{Library, SharedLibrary};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::events::{BOOK_ADDED, BOOK_REMOVED};
    use crate::core::library::LibraryError;
    use crate::gateway::memory::publisher::MemoryPublisher;

    fn build_service() -> (CatalogServiceImpl, SharedLibrary, MemoryPublisher) {
        let config = Configuration::new("test");
        let library = Library::new(&config).shared();
        let publisher = MemoryPublisher::new();
        let svc = CatalogServiceImpl::new(&config, library.clone(), Box::new(publisher.clone()));
        (svc, library, publisher)
    }

    fn christie(isbn: &str, title: &str, quantity: i64) -> BookDto {
        BookDto::new(isbn, title, AuthorDto::new("Agatha", "Christie"), quantity)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (catalog_svc, _, publisher) = build_service();

        let book = christie("978-0062073481", "Murder on the Orient Express", 3);
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(book, added);

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book.isbn, loaded.isbn);
        assert_eq!(3, loaded.quantity);
        assert_eq!(vec![BOOK_ADDED.to_string()], publisher.names().await);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_book() {
        let (catalog_svc, library, publisher) = build_service();

        let res = catalog_svc.add_book(&christie("X", "Broken", -1)).await;
        assert!(matches!(res, Err(LibraryError::InvalidBookData { .. })));
        let res = catalog_svc.add_book(&christie("", "No isbn", 1)).await;
        assert!(matches!(res, Err(LibraryError::InvalidBookData { .. })));
        assert_eq!(0, library.lock().await.book_count());
        assert!(publisher.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let (catalog_svc, library, _) = build_service();

        let _ = catalog_svc.add_book(&christie("A", "First", 1)).await.expect("should add book");
        let res = catalog_svc.add_book(&christie("A", "Second", 5)).await;
        assert!(matches!(res, Err(LibraryError::DuplicateBook { .. })));
        assert_eq!(1, library.lock().await.book_count());
        let loaded = catalog_svc.find_book_by_isbn("A").await.expect("should return book");
        assert_eq!("First", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let (catalog_svc, _, publisher) = build_service();

        let book = christie("isbn123", "test book", 1);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let removed = catalog_svc.remove_book(book.isbn.as_str()).await.expect("should remove book");
        assert_eq!(book.isbn, removed.isbn);

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await;
        assert!(matches!(loaded, Err(LibraryError::BookNotFound { .. })));
        let res = catalog_svc.remove_book(book.isbn.as_str()).await;
        assert!(matches!(res, Err(LibraryError::BookNotFound { .. })));
        assert_eq!(vec![BOOK_ADDED.to_string(), BOOK_REMOVED.to_string()], publisher.names().await);
    }

    #[tokio::test]
    async fn test_should_list_books_sorted_by_title() {
        let (catalog_svc, _, _) = build_service();

        let _ = catalog_svc.add_book(&christie("1", "Ten Little Indians", 1)).await.expect("should add book");
        let _ = catalog_svc.add_book(&christie("2", "Death on the Nile", 1)).await.expect("should add book");
        let _ = catalog_svc.add_book(&christie("3", "Murder on the Orient Express", 1)).await.expect("should add book");
        let titles: Vec<String> = catalog_svc.list_books().await.expect("should list")
            .into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["Death on the Nile", "Murder on the Orient Express", "Ten Little Indians"], titles);
    }
}
