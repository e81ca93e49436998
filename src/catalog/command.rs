pub mod checkout_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod return_book_cmd;
pub mod sort_books_cmd;
