use tracing::{info, warn};
use crate::catalog::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{BookDto, LoanDto, VolumeLoanDto};
use crate::catalog::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, SortKey};

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
        }
    }

    fn validate_days(&self, days: i64) -> LibraryResult<()> {
        if days < self.config.min_loan_days || days > self.config.max_loan_days {
            return Err(LibraryError::validation(
                format!("loan duration must be between {} and {} days, got {}",
                        self.config.min_loan_days, self.config.max_loan_days, days).as_str(), None));
        }
        Ok(())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.book_repository.all()?.iter().map(BookDto::from).collect())
    }

    fn find_book_by_id(&self, book_id: u32) -> LibraryResult<BookDto> {
        self.book_repository.get(book_id).map(|book| BookDto::from(&book))
    }

    fn available_volumes(&self, book_id: u32) -> LibraryResult<Vec<String>> {
        Ok(self.book_repository.get(book_id)?.available_volumes())
    }

    fn borrowed_volumes(&self, book_id: u32) -> LibraryResult<Vec<String>> {
        Ok(self.book_repository.get(book_id)?.borrowed_volumes())
    }

    fn checkout_book(&self, book_id: u32, days: i64, volume: Option<&str>) -> LibraryResult<BookDto> {
        self.validate_days(days)?;
        let mut book = self.book_repository.get(book_id)?;
        if book.is_series() {
            let volume = volume.ok_or_else(|| LibraryError::validation(
                format!("'{}' is a series, choose a volume to check out", book.title).as_str(), None))?;
            if !book.available_volumes().iter().any(|v| v == volume) {
                warn!("rejected checkout of volume '{}' of '{}'", volume, book.title);
                return Err(LibraryError::volume_unavailable(
                    format!("volume '{}' of '{}' is not available", volume, book.title).as_str()));
            }
            book.check_out_volume(volume, days);
        } else {
            if volume.is_some() {
                return Err(LibraryError::validation(
                    format!("'{}' is not a series", book.title).as_str(), None));
            }
            if book.loan().is_some() {
                warn!("rejected checkout of '{}'", book.title);
                return Err(LibraryError::already_checked_out(
                    format!("'{}' is already checked out", book.title).as_str()));
            }
            book.check_out_single(days);
        }
        self.book_repository.update(&book)?;
        info!("checked out '{}' for {} days", volume.unwrap_or(book.title.as_str()), days);
        Ok(BookDto::from(&book))
    }

    fn return_book(&self, book_id: u32, volume: Option<&str>) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(book_id)?;
        if book.is_series() {
            if book.borrowed_volumes().is_empty() {
                return Err(LibraryError::nothing_to_return(
                    format!("no volumes of '{}' are currently borrowed", book.title).as_str()));
            }
            let volume = volume.ok_or_else(|| LibraryError::validation(
                format!("'{}' is a series, choose a volume to return", book.title).as_str(), None))?;
            book.return_volume(volume);
        } else {
            if book.loan().is_none() {
                return Err(LibraryError::nothing_to_return(
                    format!("'{}' is already in the library", book.title).as_str()));
            }
            book.return_single();
        }
        self.book_repository.update(&book)?;
        info!("returned '{}'", volume.unwrap_or(book.title.as_str()));
        Ok(BookDto::from(&book))
    }

    fn sort_books(&self, key: SortKey) -> LibraryResult<()> {
        self.book_repository.sort(key)?;
        info!("sorted catalog by {}", key);
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        BookDto {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            volumes: other.volumes.clone(),
            status: other.status(),
            loan: other.loan().map(|loan| LoanDto {
                checkout_at: loan.checkout_at,
                due_at: loan.due_at,
                days_borrowed: loan.days_borrowed,
            }),
            volume_loans: other.volume_loans().iter().map(|(volume, loan)| VolumeLoanDto {
                volume: volume.to_string(),
                checkout_at: loan.checkout_at,
                due_at: loan.due_at,
            }).collect(),
        }
    }
}
