use serde::{Deserialize, Serialize};

// Configuration abstracts the lending policy for the running application.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub library_name: String,
    pub min_loan_days: i64,
    pub max_loan_days: i64,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            min_loan_days: 1,
            max_loan_days: 365,
        }
    }
}
