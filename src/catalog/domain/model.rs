use std::collections::BTreeMap;
use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::library::LendingStatus;
use crate::utils::date::serializer;

// Loan records one checkout window. The due date is always the checkout
// date plus the borrowed days; the duration is stored as given, without
// clamping, and the lending policy is enforced by the service layer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct Loan {
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub days_borrowed: i64,
}

impl Loan {
    pub fn new(days: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            checkout_at: now,
            due_at: now + Duration::days(days),
            days_borrowed: days,
        }
    }
}

// LendingState is the per-entry checkout payload. A single book holds at
// most one loan; a series holds a key-ordered map of volume label to loan,
// where an absent label means the volume is on the shelf.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum LendingState {
    Single(Option<Loan>),
    Series(BTreeMap<String, Loan>),
}

// BookEntity is one catalog record, either a single book or a multi-volume
// series. The kind is fixed at construction and the identity fields are
// never mutated afterwards; checkout and return are the only transitions.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: u32,
    pub title: String,
    pub author: String,
    pub volumes: Vec<String>,
    pub lending: LendingState,
}

impl BookEntity {
    pub fn single(book_id: u32, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            volumes: Vec::new(),
            lending: LendingState::Single(None),
        }
    }

    pub fn series(book_id: u32, title: &str, author: &str, volumes: &[&str]) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            volumes: volumes.iter().map(|v| v.to_string()).collect(),
            lending: LendingState::Series(BTreeMap::new()),
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self.lending, LendingState::Series(_))
    }

    // Status aggregation for the table. Pure; no side effects.
    pub fn status(&self) -> LendingStatus {
        match &self.lending {
            LendingState::Single(None) => LendingStatus::Available,
            LendingState::Single(Some(_)) => LendingStatus::CheckedOut,
            LendingState::Series(loans) => {
                let borrowed = loans.len();
                let total = self.volumes.len();
                if borrowed == 0 {
                    LendingStatus::Available
                } else if borrowed == total {
                    LendingStatus::AllCheckedOut
                } else {
                    LendingStatus::PartiallyCheckedOut { borrowed, total }
                }
            }
        }
    }

    // Volumes on the shelf, in the original series order.
    pub fn available_volumes(&self) -> Vec<String> {
        match &self.lending {
            LendingState::Series(loans) => self.volumes.iter()
                .filter(|v| !loans.contains_key(v.as_str()))
                .cloned()
                .collect(),
            LendingState::Single(_) => Vec::new(),
        }
    }

    pub fn borrowed_volumes(&self) -> Vec<String> {
        match &self.lending {
            LendingState::Series(loans) => loans.keys().cloned().collect(),
            LendingState::Single(_) => Vec::new(),
        }
    }

    pub fn loan(&self) -> Option<&Loan> {
        match &self.lending {
            LendingState::Single(loan) => loan.as_ref(),
            LendingState::Series(_) => None,
        }
    }

    pub fn volume_loans(&self) -> Vec<(&str, &Loan)> {
        match &self.lending {
            LendingState::Series(loans) => loans.iter()
                .map(|(volume, loan)| (volume.as_str(), loan))
                .collect(),
            LendingState::Single(_) => Vec::new(),
        }
    }

    pub fn check_out_single(&mut self, days: i64) {
        if let LendingState::Single(loan) = &mut self.lending {
            *loan = Some(Loan::new(days));
        }
    }

    pub fn check_out_volume(&mut self, volume: &str, days: i64) {
        if let LendingState::Series(loans) = &mut self.lending {
            loans.insert(volume.to_string(), Loan::new(days));
        }
    }

    pub fn return_single(&mut self) {
        if let LendingState::Single(loan) = &mut self.lending {
            *loan = None;
        }
    }

    // Removing a volume that is not on loan is a no-op, not an error.
    pub fn return_volume(&mut self, volume: &str) {
        if let LendingState::Series(loans) = &mut self.lending {
            loans.remove(volume);
        }
    }
}
