use std::io;
use std::io::{BufRead, Write};
use std::rc::Rc;
use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::sort_books_cmd::{SortBooksCommand, SortBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookDto;
use crate::console::{prompt, table};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{LendingStatus, SortKey};

// Console drives the interactive session. Every action collects all of its
// inputs first and then makes a single catalog call; cancelling any prompt
// abandons the whole pending operation with the catalog untouched.
pub(crate) struct Console<R: BufRead, W: Write> {
    input: R,
    out: W,
    config: Configuration,
    catalog_service: Rc<dyn CatalogService>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, out: W, config: &Configuration,
                      catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            input,
            out,
            config: config.clone(),
            catalog_service,
        }
    }

    pub(crate) fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.config.library_name)?;
        loop {
            self.render_catalog()?;
            let choice = prompt::ask_line(&mut self.input, &mut self.out,
                                          "\n[c] check out  [r] return  [s] sort  [q] quit >")?;
            match choice.as_deref() {
                Some("c") => self.action_checkout()?,
                Some("r") => self.action_return()?,
                Some("s") => self.action_sort()?,
                Some("q") | None => break,
                Some(other) => writeln!(self.out, "Unknown option '{}'.", other)?,
            }
        }
        Ok(())
    }

    fn render_catalog(&mut self) -> io::Result<()> {
        match ListBooksCommand::new(self.catalog_service.clone()).execute(ListBooksCommandRequest::new()) {
            Ok(res) => writeln!(self.out, "{}", table::render(&res.books)),
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: CommandError) -> io::Result<()> {
        match err {
            CommandError::NotFound { message }
            | CommandError::Unavailable { message }
            | CommandError::NothingToReturn { message } => writeln!(self.out, "{}", message),
            CommandError::Validation { message, .. } => writeln!(self.out, "{}", message),
            other => writeln!(self.out, "{:?}", other),
        }
    }

    fn select_book(&mut self, verb: &str) -> io::Result<Option<BookDto>> {
        let book_id = match prompt::ask_number(&mut self.input, &mut self.out,
                                               format!("Book id to {} (blank to cancel):", verb).as_str(),
                                               1, i64::from(u32::MAX))? {
            Some(book_id) => book_id,
            None => {
                writeln!(self.out, "Please select a book to {}.", verb)?;
                return Ok(None);
            }
        };
        match GetBookCommand::new(self.catalog_service.clone())
            .execute(GetBookCommandRequest::new(book_id as u32)) {
            Ok(res) => Ok(Some(res.book)),
            Err(err) => {
                self.report(err)?;
                Ok(None)
            }
        }
    }

    fn action_checkout(&mut self) -> io::Result<()> {
        let book = match self.select_book("check out")? {
            Some(book) => book,
            None => return Ok(()),
        };

        let volume = if book.is_series() {
            let available = match self.catalog_service.available_volumes(book.book_id) {
                Ok(volumes) => volumes,
                Err(err) => return self.report(CommandError::from(err)),
            };
            if available.is_empty() {
                return writeln!(self.out, "All books in this series are currently checked out.");
            }
            match prompt::ask_selection(&mut self.input, &mut self.out,
                                        format!("Which book from '{}'?", book.title).as_str(),
                                        &available)? {
                Some(volume) => Some(volume),
                None => return writeln!(self.out, "Cancelled."),
            }
        } else {
            if book.status != LendingStatus::Available {
                return writeln!(self.out, "'{}' is already checked out.", book.title);
            }
            None
        };

        let days = match prompt::ask_number(&mut self.input, &mut self.out,
                                            "How many days to borrow?",
                                            self.config.min_loan_days, self.config.max_loan_days)? {
            Some(days) => days,
            None => return writeln!(self.out, "Cancelled."),
        };

        match CheckoutBookCommand::new(self.catalog_service.clone())
            .execute(CheckoutBookCommandRequest::new(book.book_id, days, volume.as_deref())) {
            Ok(_) => {
                let name = volume.unwrap_or(book.title);
                writeln!(self.out, "You have checked out '{}' for {} days.", name, days)
            }
            Err(err) => self.report(err),
        }
    }

    fn action_return(&mut self) -> io::Result<()> {
        let book = match self.select_book("return")? {
            Some(book) => book,
            None => return Ok(()),
        };

        let volume = if book.is_series() {
            let borrowed = match self.catalog_service.borrowed_volumes(book.book_id) {
                Ok(volumes) => volumes,
                Err(err) => return self.report(CommandError::from(err)),
            };
            if borrowed.is_empty() {
                return writeln!(self.out, "No books from this series are currently borrowed.");
            }
            match prompt::ask_selection(&mut self.input, &mut self.out,
                                        format!("Which book to return from '{}'?", book.title).as_str(),
                                        &borrowed)? {
                Some(volume) => Some(volume),
                None => return writeln!(self.out, "Cancelled."),
            }
        } else {
            if book.status == LendingStatus::Available {
                return writeln!(self.out, "'{}' is already in the library.", book.title);
            }
            None
        };

        let display_name = volume.clone().unwrap_or_else(|| book.title.clone());
        if !prompt::ask_confirm(&mut self.input, &mut self.out,
                                format!("Return '{}'? [y/N]", display_name).as_str())? {
            return writeln!(self.out, "Cancelled.");
        }

        match ReturnBookCommand::new(self.catalog_service.clone())
            .execute(ReturnBookCommandRequest::new(book.book_id, volume.as_deref())) {
            Ok(_) => writeln!(self.out, "Returned '{}'.", display_name),
            Err(err) => self.report(err),
        }
    }

    fn action_sort(&mut self) -> io::Result<()> {
        let options = vec!["Title".to_string(), "Author".to_string(), "Status".to_string()];
        let picked = match prompt::ask_selection(&mut self.input, &mut self.out,
                                                 "Sort by:", &options)? {
            Some(picked) => picked,
            None => return writeln!(self.out, "Cancelled."),
        };
        match SortBooksCommand::new(self.catalog_service.clone())
            .execute(SortBooksCommandRequest::new(SortKey::from(picked))) {
            Ok(_) => Ok(()),
            Err(err) => self.report(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::rc::Rc;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::console::controller::Console;
    use crate::core::domain::Configuration;

    fn run_session(script: &str) -> (Rc<dyn CatalogService>, String) {
        let config = Configuration::new("test");
        let svc = create_catalog_service(&config).expect("should build service");
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut out,
                                       &config, svc.clone());
        console.run().expect("session should run");
        drop(console);
        (svc, String::from_utf8(out).expect("should be utf8"))
    }

    #[test]
    fn test_should_checkout_series_volume_from_menu() {
        // check out, id 17, second available volume, 14 days, quit
        let (svc, output) = run_session("c\n17\n2\n14\nq\n");
        assert!(output.contains("You have checked out '2. The Two Towers' for 14 days."));
        let book = svc.find_book_by_id(17).expect("should get");
        assert_eq!("1/3 Checked Out", book.status_display());
    }

    #[test]
    fn test_should_checkout_and_return_single_book_from_menu() {
        let (svc, output) = run_session("c\n2\n14\nr\n2\ny\nq\n");
        assert!(output.contains("You have checked out '1984' for 14 days."));
        assert!(output.contains("Returned '1984'."));
        assert_eq!("Available", svc.find_book_by_id(2).expect("should get").status_display());
    }

    #[test]
    fn test_should_abort_checkout_without_selection() {
        let (svc, output) = run_session("c\n\nq\n");
        assert!(output.contains("Please select a book to check out."));
        let books = svc.list_books().expect("should list");
        assert!(books.iter().all(|b| b.status_display() == "Available"));
    }

    #[test]
    fn test_should_abort_checkout_when_duration_cancelled() {
        // volume picked but the duration prompt is dismissed, nothing mutates
        let (svc, output) = run_session("c\n17\n2\n\nq\n");
        assert!(output.contains("Cancelled."));
        assert_eq!("Available", svc.find_book_by_id(17).expect("should get").status_display());
    }

    #[test]
    fn test_should_refuse_double_checkout_from_menu() {
        let (_, output) = run_session("c\n2\n14\nc\n2\nq\n");
        assert!(output.contains("'1984' is already checked out."));
    }

    #[test]
    fn test_should_refuse_return_of_shelved_book() {
        let (_, output) = run_session("r\n2\nq\n");
        assert!(output.contains("'1984' is already in the library."));
    }

    #[test]
    fn test_should_keep_book_when_return_not_confirmed() {
        let (svc, output) = run_session("c\n2\n14\nr\n2\nn\nq\n");
        assert!(output.contains("Cancelled."));
        assert_eq!("Checked Out", svc.find_book_by_id(2).expect("should get").status_display());
    }

    #[test]
    fn test_should_report_unknown_book_id() {
        let (_, output) = run_session("c\n42\nq\n");
        assert!(output.contains("book with id 42 not found"));
    }

    #[test]
    fn test_should_sort_from_menu() {
        let (svc, _) = run_session("s\n1\nq\n");
        let books = svc.list_books().expect("should list");
        assert_eq!("1984", books[0].title.as_str());
    }
}
