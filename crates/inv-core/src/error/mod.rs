use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid order status: {value} {location}")]
    InvalidOrderStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidOrderStatus error at caller location.
    #[track_caller]
    pub fn invalid_order_status(value: impl Into<String>) -> Self {
        Self::InvalidOrderStatus {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
