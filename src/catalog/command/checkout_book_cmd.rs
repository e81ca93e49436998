use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckoutBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    book_id: u32,
    days: i64,
    volume: Option<String>,
}

impl CheckoutBookCommandRequest {
    pub fn new(book_id: u32, days: i64, volume: Option<&str>) -> Self {
        Self {
            book_id,
            days,
            volume: volume.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub(crate) book: BookDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.catalog_service.checkout_book(req.book_id, req.days, req.volume.as_deref())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_checkout_book() {
        let svc = create_catalog_service(&Configuration::new("test")).expect("should build service");
        let cmd = CheckoutBookCommand::new(svc);

        let res = cmd.execute(CheckoutBookCommandRequest::new(2, 14, None)).expect("should checkout");
        assert_eq!(2, res.book.book_id);
        assert_eq!("Checked Out", res.book.status_display());
    }

    #[test]
    fn test_should_report_unavailable_book() {
        let svc = create_catalog_service(&Configuration::new("test")).expect("should build service");
        let cmd = CheckoutBookCommand::new(svc);

        let _ = cmd.execute(CheckoutBookCommandRequest::new(2, 14, None)).expect("should checkout");
        let res = cmd.execute(CheckoutBookCommandRequest::new(2, 7, None));
        assert!(matches!(res, Err(CommandError::Unavailable { message: _ })));
    }
}
