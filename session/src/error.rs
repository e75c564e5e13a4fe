use thiserror::Error;

use crate::registration::RegistrationField;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("store error: {0}")]
    Store(#[from] portal_store::StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A single rejected registration field.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: RegistrationField,
    pub message: &'static str,
}
