use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::LendingStatus;
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanDto {
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub days_borrowed: i64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct VolumeLoanDto {
    pub volume: String,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

// BookDto is the snapshot of one catalog entry handed to the presentation
// layer for table rendering and selection prompts.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_id: u32,
    pub title: String,
    pub author: String,
    pub volumes: Vec<String>,
    pub status: LendingStatus,
    pub loan: Option<LoanDto>,
    pub volume_loans: Vec<VolumeLoanDto>,
}

impl BookDto {
    pub fn is_series(&self) -> bool {
        !self.volumes.is_empty()
    }

    pub fn status_display(&self) -> String {
        self.status.to_string()
    }
}
