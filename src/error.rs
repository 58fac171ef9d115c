use chrono::NaiveDate;
use thiserror::Error;

use crate::app_system::Screen;

/// Errors raised while moving through the order screens.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowError {
    #[error("No flavor selected")]
    NoFlavorSelected,
    #[error("Expected screen {expected:?}, currently on {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },
    #[error("Summary is the last screen; send or cancel the order")]
    EndOfFlow,
    #[error("Order could not be shared: {0}")]
    Share(#[from] ShareError),
    #[error(transparent)]
    Pickup(#[from] PickupError),
}

/// Errors raised while building the pickup days.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PickupError {
    #[error("Not enough calendar days after {0} for every pickup option")]
    OutOfRange(NaiveDate),
}

/// Errors raised by a share target.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShareError {
    #[error("No app available to receive the order")]
    NoHandler,
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid amount for {var}: {value}")]
    InvalidAmount { var: String, value: String },
}
