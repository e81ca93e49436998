use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    book_id: u32,
    volume: Option<String>,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: u32, volume: Option<&str>) -> Self {
        Self {
            book_id,
            volume: volume.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub(crate) book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id, req.volume.as_deref())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_return_book() {
        let svc = create_catalog_service(&Configuration::new("test")).expect("should build service");
        let res = ReturnBookCommand::new(svc.clone()).execute(ReturnBookCommandRequest::new(17, Some("2. The Two Towers")));
        assert!(matches!(res, Err(CommandError::NothingToReturn { message: _ })));

        let _ = CheckoutBookCommand::new(svc.clone())
            .execute(CheckoutBookCommandRequest::new(17, 14, Some("2. The Two Towers")))
            .expect("should checkout");
        let returned = ReturnBookCommand::new(svc)
            .execute(ReturnBookCommandRequest::new(17, Some("2. The Two Towers")))
            .expect("should return");
        assert_eq!("Available", returned.book.status_display());
    }
}
