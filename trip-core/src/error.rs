use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TripError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Duplicate trip id: {0}")]
    DuplicateTripId(u32),
}

impl From<TripError> for String {
    fn from(err: TripError) -> Self {
        err.to_string()
    }
}

impl From<toml::de::Error> for TripError {
    fn from(err: toml::de::Error) -> Self {
        TripError::Catalog(err.to_string())
    }
}
