use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn not_found(key: &impl Display) -> Self {
        Self::NotFound(key.to_string())
    }
}
