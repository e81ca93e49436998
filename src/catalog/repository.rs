pub mod memory_book_repository;

use crate::catalog::domain::model::BookEntity;
use crate::core::library::{LibraryResult, SortKey};

// BookRepository owns the ordered catalog collection. The stored order is
// the order the presentation layer renders, so sort reorders in place.
pub(crate) trait BookRepository {
    // add an entry; the id must be unique within the catalog
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize>;

    // write back a mutated entry
    fn update(&self, entity: &BookEntity) -> LibraryResult<usize>;

    // get an entry by id
    fn get(&self, book_id: u32) -> LibraryResult<BookEntity>;

    // all entries in stored order
    fn all(&self) -> LibraryResult<Vec<BookEntity>>;

    // stable in-place reorder by the given criteria
    fn sort(&self, key: SortKey) -> LibraryResult<()>;
}
