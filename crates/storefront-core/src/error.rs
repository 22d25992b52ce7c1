use thiserror::Error;

/// Fixed user-facing text shown when the product listing could not be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "خطا در دریافت محصولات";

/// Any failure while retrieving the product listing.
///
/// The variants only exist for diagnostics. Every one of them ends up as
/// [`FETCH_ERROR_MESSAGE`] once it reaches the listing state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Catalog service responded with status {0}")]
    Status(u16),

    #[error("Malformed product payload: {0}")]
    Malformed(String),
}

impl FetchFailure {
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}
