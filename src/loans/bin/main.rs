include!("../../lib.rs");
use std::fmt::Display;
use std::sync::Arc;
use chrono::NaiveDate;
use crate::books::domain::model::{AuthorEntity, BookEntity};
use crate::books::dto::{AuthorDto, BookDto};
use crate::catalog::domain::model::SharedLibrary;
use crate::catalog::factory::create_catalog_service;
use crate::catalog::registry::LibraryRegistry;
use crate::core::domain::{Configuration, LibraryAsset};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;
use crate::loans::domain::model::LoanEntity;
use crate::loans::factory::create_loan_service;
use crate::readers::domain::model::ReaderEntity;
use crate::readers::dto::ReaderDto;
use crate::readers::factory::create_reader_service;
use crate::utils::date::today;
use crate::utils::logging::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

// prints the outcome of one step; failures are reported and the scenario carries on
fn report<T: Display>(step: &str, res: LibraryResult<T>) {
    match res {
        Ok(value) => println!("{}: {}", step, value),
        Err(err) => println!("{} failed: {}", step, err),
    }
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, LibraryError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| LibraryError::runtime(
        format!("invalid date {}-{}-{}", y, m, d).as_str(), None))
}

fn author_dto(author: &AuthorEntity) -> AuthorDto {
    AuthorDto::new(author.first_name.as_str(), author.last_name.as_str())
}

async fn print_listings(library: &SharedLibrary) {
    let library = library.lock().await;
    println!("Books:");
    for book in library.list_books() {
        println!("  {} [{}], copies: {}", book, book.genre(), book.quantity());
    }
    println!("Readers:");
    for reader in library.list_readers() {
        println!("  {}", reader);
    }
    println!("Loans:");
    for loan in library.list_loans() {
        println!("  {}", loan);
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let tolkien = AuthorEntity::new("John", "Tolkien");
    let christie = AuthorEntity::new("Agatha", "Christie");
    let tolkien_again = AuthorEntity::new("John", "Tolkien");
    println!("{} equals {}: {}", tolkien, christie, tolkien == christie);
    println!("{} equals {}: {}", tolkien, tolkien_again, tolkien == tolkien_again);

    let rings = BookEntity::new("The Lord of the Rings", tolkien.clone(), "978-0618260264", "Fantasy", 5)?;
    let orient = BookEntity::new("Murder on the Orient Express", christie.clone(), "978-0062073481", "Detective", 3)?;
    let indians = BookEntity::new("Ten Little Indians", christie.clone(), "978-0062073481", "Detective", 0)?;
    println!("'{}' sorts before '{}': {}", rings.title(), orient.title(), rings.cmp_by_title(&orient).is_lt());
    println!("'{}' equals '{}': {}", orient.title(), indians.title(), orient == indians);

    let config = Configuration::new("Main Library")
        .with_address("1 Pushkin street")
        .with_library_type("Scientific");
    let registry = Arc::new(LibraryRegistry::new());
    let library = registry.open_library(&config).shared();

    let catalog = create_catalog_service(&config, library.clone(), GatewayPublisherVia::Memory);
    let readers = create_reader_service(&config, library.clone(), GatewayPublisherVia::Memory);
    let loans = create_loan_service(&config, library.clone(), GatewayPublisherVia::Memory);

    for book in [&rings, &orient, &orient] {
        let mut dto = BookDto::new(book.isbn(), book.title(), author_dto(book.author()), i64::from(book.quantity()));
        dto.genre = book.genre().to_string();
        report("add book", catalog.add_book(&dto).await.map(|b| b.title));
    }
    let broken = BookDto::new("123", "Broken Book", author_dto(&tolkien), -1);
    report("add book", catalog.add_book(&broken).await.map(|b| b.title));

    let ivan = ReaderEntity::new("Ivan", "Ivanov", "12345");
    let maria = ReaderEntity::new("Maria", "Petrova", "67890");
    for reader in [&ivan, &maria, &ivan] {
        let dto = ReaderDto::new(reader.reader_id.as_str(), reader.first_name.as_str(), reader.last_name.as_str());
        report("add reader", readers.add_reader(&dto).await.map(|r| r.reader_id));
    }

    print_listings(&library).await;

    let lends = [
        (&rings, &ivan, date(2025, 2, 1)?),
        (&orient, &maria, date(2025, 2, 8)?),
        (&orient, &ivan, date(2025, 2, 8)?),
        (&indians, &ivan, date(2025, 2, 8)?),
        (&indians, &maria, date(2025, 2, 8)?),
    ];
    for (book, reader, due) in lends {
        report("lend", loans.lend(book.isbn(), reader.reader_id.as_str(), Some(due)).await.map(|l| l.title));
    }

    report("return", loans.return_book(rings.isbn(), ivan.reader_id.as_str()).await.map(|l| l.title));
    report("return", loans.return_book(rings.isbn(), ivan.reader_id.as_str()).await.map(|l| l.title));

    report("remove book", catalog.remove_book(orient.isbn()).await.map(|b| b.title));
    report("remove reader", readers.remove_reader(maria.reader_id.as_str()).await.map(|r| r.reader_id));

    print_listings(&library).await;

    let overdue = loans.query_overdue(today()).await?;
    println!("Overdue loans: {}", overdue.len());
    println!("Libraries opened: {}", registry.library_count());
    println!("{}", library.lock().await.display_info());

    let sample = LoanEntity::new(&rings, &ivan, date(2025, 1, 16)?, date(2025, 2, 16)?);
    println!("{} overdue: {}", sample, sample.is_overdue(today()));
    Ok(())
}
