use thiserror::Error;

/// Rejections from [`crate::state::DspStore::dispatch`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Unknown {kind} '{id}'")]
    UnknownReference { kind: &'static str, id: String },
    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },
    #[error("{id} cannot advance past {from}")]
    InvalidTransition { id: String, from: &'static str },
    #[error("Store is no longer available")]
    Disposed,
}

/// Validation failures from the modal forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),
    #[error("{0} must be a valid date or time")]
    InvalidDate(&'static str),
}

/// Why a modal did not close
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Rejected(#[from] StoreError),
}
