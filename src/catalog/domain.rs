pub mod model;
pub mod service;

use crate::catalog::dto::BookDto;
use crate::core::library::{LibraryResult, SortKey};

// CatalogService is the operation surface consumed by the presentation
// layer. Mutations validate availability and lending policy up front and
// report explicit failures instead of trusting the caller.
pub(crate) trait CatalogService {
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn find_book_by_id(&self, book_id: u32) -> LibraryResult<BookDto>;
    fn available_volumes(&self, book_id: u32) -> LibraryResult<Vec<String>>;
    fn borrowed_volumes(&self, book_id: u32) -> LibraryResult<Vec<String>>;
    fn checkout_book(&self, book_id: u32, days: i64, volume: Option<&str>) -> LibraryResult<BookDto>;
    fn return_book(&self, book_id: u32, volume: Option<&str>) -> LibraryResult<BookDto>;
    fn sort_books(&self, key: SortKey) -> LibraryResult<()>;
}
