use std::collections::HashMap;
use std::sync::Arc;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::core::domain::{Configuration, LibraryAsset};
use crate::core::library::{LibraryError, LibraryResult};
use crate::loans::domain::model::LoanEntity;
use crate::readers::domain::model::ReaderEntity;
use crate::utils::date::today;

// SharedLibrary is the single lock guarding catalog, readers and loans together. Every
// check-then-act operation runs inside one acquisition of it.
pub(crate) type SharedLibrary = Arc<Mutex<Library>>;

/// Library owns the catalog of books (keyed by ISBN), the registry of readers
/// (keyed by reader id, listed in registration order) and the active loans
/// (in lend order).
///
/// Lending moves one copy of a book from the shelf to a reader: the book's
/// quantity goes down by one and a loan is appended. Returning undoes both for
/// the first matching loan.
#[derive(Debug)]
pub struct Library {
    name: String,
    address: String,
    library_type: String,
    catalog: HashMap<String, BookEntity>,
    readers: HashMap<String, ReaderEntity>,
    reader_order: Vec<String>,
    loans: Vec<LoanEntity>,
}

impl Library {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            name: config.library_name.to_string(),
            address: config.address.to_string(),
            library_type: config.library_type.to_string(),
            catalog: HashMap::new(),
            readers: HashMap::new(),
            reader_order: vec![],
            loans: vec![],
        }
    }

    pub(crate) fn shared(self) -> SharedLibrary {
        Arc::new(Mutex::new(self))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn library_type(&self) -> &str {
        self.library_type.as_str()
    }

    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    pub fn add_book(&mut self, book: BookEntity) -> LibraryResult<()> {
        if self.catalog.contains_key(book.isbn()) {
            return Err(LibraryError::duplicate_book(
                format!("book with isbn {} is already in the catalog", book.isbn()).as_str()));
        }
        tracing::info!(isbn = book.isbn(), "book '{}' added to the library", book.title());
        self.catalog.insert(book.isbn().to_string(), book);
        Ok(())
    }

    pub fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let book = self.catalog.remove(isbn).ok_or_else(|| LibraryError::book_not_found(
            format!("book with isbn {} is not in the catalog", isbn).as_str()))?;
        tracing::info!(isbn, "book '{}' removed from the library", book.title());
        Ok(book)
    }

    pub fn find_book(&self, isbn: &str) -> LibraryResult<&BookEntity> {
        self.catalog.get(isbn).ok_or_else(|| LibraryError::book_not_found(
            format!("book with isbn {} is not in the catalog", isbn).as_str()))
    }

    pub fn add_reader(&mut self, reader: ReaderEntity) -> LibraryResult<()> {
        if reader.reader_id.trim().is_empty() {
            return Err(LibraryError::invalid_reader_data(
                format!("reader {} has an empty id", reader.full_name()).as_str(),
                Some("reader_id".to_string())));
        }
        if self.readers.contains_key(reader.reader_id.as_str()) {
            return Err(LibraryError::duplicate_reader(
                format!("reader with id {} is already registered", reader.reader_id).as_str()));
        }
        tracing::info!(reader_id = reader.reader_id.as_str(), "reader '{}' added to the library", reader.full_name());
        self.reader_order.push(reader.reader_id.to_string());
        self.readers.insert(reader.reader_id.to_string(), reader);
        Ok(())
    }

    pub fn remove_reader(&mut self, reader_id: &str) -> LibraryResult<ReaderEntity> {
        let reader = self.readers.remove(reader_id).ok_or_else(|| LibraryError::reader_not_found(
            format!("reader with id {} is not registered", reader_id).as_str()))?;
        self.reader_order.retain(|id| id != reader_id);
        tracing::info!(reader_id, "reader '{}' removed from the library", reader.full_name());
        Ok(reader)
    }

    pub fn find_reader(&self, reader_id: &str) -> LibraryResult<&ReaderEntity> {
        self.readers.get(reader_id).ok_or_else(|| LibraryError::reader_not_found(
            format!("reader with id {} is not registered", reader_id).as_str()))
    }

    // Existence of the book and the reader is checked before availability.
    pub fn lend(&mut self, isbn: &str, reader_id: &str, due_date: NaiveDate) -> LibraryResult<LoanEntity> {
        let book = self.catalog.get_mut(isbn).ok_or_else(|| LibraryError::book_not_found(
            format!("book with isbn {} is not in the catalog", isbn).as_str()))?;
        let reader = self.readers.get(reader_id).ok_or_else(|| LibraryError::reader_not_found(
            format!("reader with id {} is not registered", reader_id).as_str()))?;
        book.take_copy()?;
        let loan = LoanEntity::new(book, reader, today(), due_date);
        tracing::info!(isbn, reader_id, "book '{}' lent to reader '{}'", loan.title, loan.reader_name);
        self.loans.push(loan.clone());
        Ok(loan)
    }

    pub fn return_book(&mut self, isbn: &str, reader_id: &str) -> LibraryResult<LoanEntity> {
        let position = self.loans.iter().position(|loan| loan.matches(isbn, reader_id))
            .ok_or_else(|| LibraryError::loan_not_found(
                format!("book with isbn {} was not lent to reader {}", isbn, reader_id).as_str()))?;
        let mut loan = self.loans.remove(position);
        match self.catalog.get_mut(isbn) {
            Some(book) => book.put_back_copy(),
            None => tracing::warn!(isbn, "returned book is no longer catalogued, quantity not restored"),
        }
        loan.mark_returned();
        tracing::info!(isbn, reader_id, "book '{}' returned by reader '{}'", loan.title, loan.reader_name);
        Ok(loan)
    }

    pub fn list_books(&self) -> Vec<&BookEntity> {
        let mut books: Vec<&BookEntity> = self.catalog.values().collect();
        books.sort_by(|a, b| a.cmp_by_title(b));
        books
    }

    pub fn list_readers(&self) -> Vec<&ReaderEntity> {
        self.reader_order.iter().filter_map(|id| self.readers.get(id)).collect()
    }

    pub fn list_loans(&self) -> &[LoanEntity] {
        &self.loans
    }

    pub fn overdue_loans(&self, today: NaiveDate) -> Vec<&LoanEntity> {
        self.loans.iter().filter(|loan| loan.is_overdue(today)).collect()
    }
}

impl LibraryAsset for Library {
    fn display_info(&self) -> String {
        format!("Library: {}, Address: {}, Type: {}, Books in catalog: {}",
                self.name, self.address, self.library_type, self.catalog.len())
    }
}
