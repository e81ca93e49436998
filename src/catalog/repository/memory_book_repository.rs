use std::cell::RefCell;
use crate::catalog::domain::model::BookEntity;
use crate::catalog::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, SortKey};

// MemoryBookRepository keeps the catalog in an ordered in-process list.
// The application is single-threaded, so interior mutability is enough.
pub(crate) struct MemoryBookRepository {
    books: RefCell<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RefCell::new(Vec::new()),
        }
    }
}

impl BookRepository for MemoryBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.borrow_mut();
        if books.iter().any(|b| b.book_id == entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.borrow_mut();
        match books.iter_mut().find(|b| b.book_id == entity.book_id) {
            Some(book) => {
                *book = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("book with id {} not found", entity.book_id).as_str())),
        }
    }

    fn get(&self, book_id: u32) -> LibraryResult<BookEntity> {
        self.books.borrow().iter()
            .find(|b| b.book_id == book_id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("book with id {} not found", book_id).as_str()))
    }

    fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.borrow().clone())
    }

    fn sort(&self, key: SortKey) -> LibraryResult<()> {
        let mut books = self.books.borrow_mut();
        match key {
            SortKey::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Author => books.sort_by(|a, b| a.author.cmp(&b.author)),
            // the status criterion compares display text, so "2/7 Checked
            // Out" orders by string, not by borrowed fraction
            SortKey::Status => books.sort_by_cached_key(|b| b.status().to_string()),
        }
        Ok(())
    }
}
