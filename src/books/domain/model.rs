use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// AuthorEntity abstracts the writer of a book. Two authors with the same first and last
// name compare equal regardless of biography; instances stored on books are not shared.
#[derive(Debug, Clone)]
pub struct AuthorEntity {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl AuthorEntity {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            biography: "".to_string(),
        }
    }

    pub fn with_biography(mut self, biography: &str) -> Self {
        self.biography = biography.to_string();
        self
    }
}

impl PartialEq for AuthorEntity {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Eq for AuthorEntity {}

impl Hash for AuthorEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
    }
}

impl Display for AuthorEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// BookEntity is a catalog slot: the title together with the number of copies
/// that can currently be lent.
///
/// Identity is the ISBN alone. Two entities sharing an ISBN are the same catalog
/// entry even when their titles or authors differ, so `==` and `Hash` only look
/// at the ISBN. Listings order by title instead, see [`BookEntity::cmp_by_title`].
///
/// The quantity is never negative and only changes when a copy is lent or returned.
#[derive(Debug, Clone)]
pub struct BookEntity {
    title: String,
    author: AuthorEntity,
    isbn: String,
    genre: String,
    quantity: u32,
}

impl BookEntity {
    pub fn new(title: &str, author: AuthorEntity, isbn: &str, genre: &str, quantity: i64) -> LibraryResult<Self> {
        if quantity < 0 {
            return Err(LibraryError::invalid_book_data(
                format!("quantity of book '{}' must be a non-negative integer, got {}", title, quantity).as_str(),
                Some("quantity".to_string())));
        }
        if isbn.trim().is_empty() {
            return Err(LibraryError::invalid_book_data(
                format!("isbn of book '{}' must not be empty", title).as_str(),
                Some("isbn".to_string())));
        }
        let quantity = u32::try_from(quantity).map_err(|_| LibraryError::invalid_book_data(
            format!("quantity of book '{}' is too large: {}", title, quantity).as_str(),
            Some("quantity".to_string())))?;
        Ok(Self {
            title: title.to_string(),
            author,
            isbn: isbn.to_string(),
            genre: genre.to_string(),
            quantity,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &AuthorEntity {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn genre(&self) -> &str {
        self.genre.as_str()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub fn cmp_by_title(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title).then_with(|| self.isbn.cmp(&other.isbn))
    }

    // one copy leaves the shelf
    pub(crate) fn take_copy(&mut self) -> LibraryResult<()> {
        match self.quantity.checked_sub(1) {
            Some(quantity) => {
                self.quantity = quantity;
                Ok(())
            }
            None => Err(LibraryError::book_unavailable(
                format!("book '{}' is not available for loan", self.title).as_str())),
        }
    }

    // one copy is back on the shelf
    pub(crate) fn put_back_copy(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

impl PartialEq for BookEntity {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for BookEntity {}

impl Hash for BookEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}


#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::HashSet;
    use crate::books::domain::model::{AuthorEntity, BookEntity};
    use crate::core::library::LibraryError;

    fn tolkien() -> AuthorEntity {
        AuthorEntity::new("John", "Tolkien")
    }

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("The Lord of the Rings", tolkien(), "978-0618260264", "Fantasy", 5).expect("valid book");
        assert_eq!("978-0618260264", book.isbn());
        assert_eq!("The Lord of the Rings", book.title());
        assert_eq!("Fantasy", book.genre());
        assert_eq!(5, book.quantity());
        assert!(book.is_available());
        assert_eq!("The Lord of the Rings by John Tolkien (ISBN: 978-0618260264)", book.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_negative_quantity() {
        let res = BookEntity::new("title", tolkien(), "isbn", "genre", -1);
        assert!(matches!(res, Err(LibraryError::InvalidBookData { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_empty_isbn() {
        let res = BookEntity::new("title", tolkien(), "  ", "genre", 1);
        assert!(matches!(res, Err(LibraryError::InvalidBookData { .. })));
    }

    #[tokio::test]
    async fn test_should_compare_authors_by_name() {
        let first = AuthorEntity::new("John", "Tolkien");
        let second = AuthorEntity::new("Agatha", "Christie");
        let third = AuthorEntity::new("John", "Tolkien").with_biography("philologist");
        assert_ne!(first, second);
        assert_eq!(first, third);
        let authors: HashSet<AuthorEntity> = vec![first, second, third].into_iter().collect();
        assert_eq!(2, authors.len());
    }

    #[tokio::test]
    async fn test_should_compare_books_by_isbn() {
        let christie = AuthorEntity::new("Agatha", "Christie");
        let orient = BookEntity::new("Murder on the Orient Express", christie.clone(), "978-0062073481", "Detective", 3).expect("valid book");
        let indians = BookEntity::new("Ten Little Indians", christie, "978-0062073481", "Detective", 0).expect("valid book");
        assert_eq!(orient, indians);
        let set: HashSet<BookEntity> = vec![orient, indians].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[tokio::test]
    async fn test_should_order_books_by_title() {
        let rings = BookEntity::new("The Lord of the Rings", tolkien(), "1", "Fantasy", 1).expect("valid book");
        let hobbit = BookEntity::new("The Hobbit", tolkien(), "2", "Fantasy", 1).expect("valid book");
        assert_eq!(Ordering::Greater, rings.cmp_by_title(&hobbit));
        assert_eq!(Ordering::Less, hobbit.cmp_by_title(&rings));
    }

    #[tokio::test]
    async fn test_should_take_and_put_back_copies() {
        let mut book = BookEntity::new("title", tolkien(), "isbn", "genre", 1).expect("valid book");
        book.take_copy().expect("should take copy");
        assert_eq!(0, book.quantity());
        assert!(!book.is_available());
        assert!(matches!(book.take_copy(), Err(LibraryError::BookUnavailable { .. })));
        assert_eq!(0, book.quantity());
        book.put_back_copy();
        assert_eq!(1, book.quantity());
    }
}
