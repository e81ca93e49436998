use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortKey;

pub(crate) struct SortBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl SortBooksCommand {
    pub(crate) fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SortBooksCommandRequest {
    key: SortKey,
}

impl SortBooksCommandRequest {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SortBooksCommandResponse {
    pub(crate) key: SortKey,
}

impl SortBooksCommandResponse {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
        }
    }
}

impl Command<SortBooksCommandRequest, SortBooksCommandResponse> for SortBooksCommand {
    fn execute(&self, req: SortBooksCommandRequest) -> Result<SortBooksCommandResponse, CommandError> {
        self.catalog_service.sort_books(req.key)
            .map_err(CommandError::from).map(|_| SortBooksCommandResponse::new(req.key))
    }
}
