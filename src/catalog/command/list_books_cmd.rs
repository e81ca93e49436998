use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub(crate) books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_list_books() {
        let svc = create_catalog_service(&Configuration::new("test")).expect("should build service");
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).expect("should list");
        assert_eq!(17, res.books.len());
        assert_eq!("The Great Gatsby", res.books[0].title.as_str());
        assert_eq!("The Lord of the Rings (Series)", res.books[16].title.as_str());
    }
}
