pub mod lend_book_cmd;
pub mod list_loans_cmd;
pub mod return_book_cmd;

#[cfg(test)]
pub(crate) mod tests {
    use crate::books::domain::model::{AuthorEntity, BookEntity};
    use crate::catalog::domain::model::{Library, SharedLibrary};
    use crate::core::domain::Configuration;
    use crate::readers::domain::model::ReaderEntity;

    // library with one Tolkien book of the given quantity and readers 12345 and 67890
    pub(crate) async fn seeded_library(config: &Configuration, quantity: i64) -> SharedLibrary {
        let library = Library::new(config).shared();
        {
            let mut lib = library.lock().await;
            lib.add_book(BookEntity::new("The Hobbit", AuthorEntity::new("John", "Tolkien"),
                                         "978-0547928227", "Fantasy", quantity).expect("valid book"))
                .expect("should add book");
            lib.add_reader(ReaderEntity::new("Ivan", "Ivanov", "12345")).expect("should add reader");
            lib.add_reader(ReaderEntity::new("Maria", "Petrova", "67890")).expect("should add reader");
        }
        library
    }
}
