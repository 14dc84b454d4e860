use thiserror::Error;

use crate::domain::ParseCentsError;

/// Rejected user input. The shell reports these and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month/year '{0}'. Use MM/YYYY")]
    InvalidMonthYear(String),

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: ParseCentsError,
    },
}
