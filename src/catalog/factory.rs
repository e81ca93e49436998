use std::rc::Rc;
use lazy_static::lazy_static;
use crate::catalog::domain::model::BookEntity;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::CatalogService;
use crate::catalog::repository::memory_book_repository::MemoryBookRepository;
use crate::catalog::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

lazy_static! {
    static ref SINGLE_SEEDS: Vec<(&'static str, &'static str)> = vec![
        ("The Great Gatsby", "F. Scott Fitzgerald"),
        ("1984", "George Orwell"),
        ("To Kill a Mockingbird", "Harper Lee"),
        ("Pride and Prejudice", "Jane Austen"),
        ("The Catcher in the Rye", "J.D. Salinger"),
        ("The Hobbit", "J.R.R. Tolkien"),
        ("Fahrenheit 451", "Ray Bradbury"),
        ("Moby Dick", "Herman Melville"),
        ("War and Peace", "Leo Tolstoy"),
        ("The Odyssey", "Homer"),
        ("Ulysses", "James Joyce"),
        ("Madame Bovary", "Gustave Flaubert"),
        ("The Divine Comedy", "Dante Alighieri"),
        ("The Brothers Karamazov", "Fyodor Dostoevsky"),
        ("Don Quixote", "Miguel de Cervantes"),
    ];
    static ref SERIES_SEEDS: Vec<(&'static str, &'static str, Vec<&'static str>)> = vec![
        ("Harry Potter (Series)", "J.K. Rowling", vec![
            "1. The Sorcerer's Stone", "2. The Chamber of Secrets", "3. The Prisoner of Azkaban",
            "4. The Goblet of Fire", "5. The Order of the Phoenix", "6. The Half-Blood Prince",
            "7. The Deathly Hallows",
        ]),
        ("The Lord of the Rings (Series)", "J.R.R. Tolkien", vec![
            "1. The Fellowship of the Ring", "2. The Two Towers", "3. The Return of the King",
        ]),
    ];
}

// Seed entries in catalog order: single books first, then the series, with
// ids assigned sequentially from 1 across both groups.
pub(crate) fn seed_books() -> Vec<BookEntity> {
    let mut books: Vec<BookEntity> = SINGLE_SEEDS.iter().enumerate()
        .map(|(i, (title, author))| BookEntity::single(i as u32 + 1, title, author))
        .collect();
    for (i, (title, author, volumes)) in SERIES_SEEDS.iter().enumerate() {
        books.push(BookEntity::series(
            (SINGLE_SEEDS.len() + i) as u32 + 1, title, author, volumes));
    }
    books
}

pub(crate) fn create_book_repository() -> LibraryResult<Box<dyn BookRepository>> {
    let repository = MemoryBookRepository::new();
    for book in seed_books() {
        let _ = repository.create(&book)?;
    }
    Ok(Box::new(repository))
}

pub(crate) fn create_catalog_service(config: &Configuration) -> LibraryResult<Rc<dyn CatalogService>> {
    Ok(Rc::new(CatalogServiceImpl::new(config, create_book_repository()?)))
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::{create_catalog_service, seed_books};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_seed_catalog_in_order() {
        let books = seed_books();
        assert_eq!(17, books.len());
        for (i, book) in books.iter().enumerate() {
            assert_eq!(i as u32 + 1, book.book_id);
        }
        assert_eq!("The Great Gatsby", books[0].title.as_str());
        assert!(!books[0].is_series());
        assert_eq!("Harry Potter (Series)", books[15].title.as_str());
        assert_eq!(7, books[15].volumes.len());
        assert_eq!("The Lord of the Rings (Series)", books[16].title.as_str());
        assert_eq!(3, books[16].volumes.len());
    }

    #[test]
    fn test_should_create_seeded_service() {
        let svc = create_catalog_service(&Configuration::new("test")).expect("should build service");
        let books = svc.list_books().expect("should list");
        assert_eq!(17, books.len());
        assert!(books.iter().all(|b| b.status_display() == "Available"));
    }
}
