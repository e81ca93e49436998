use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: u32,
}

impl GetBookCommandRequest {
    pub fn new(book_id: u32) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub(crate) book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id)
            .map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
