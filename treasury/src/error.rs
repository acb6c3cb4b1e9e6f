//! Treasury error types

use thiserror::Error;

/// Treasury pool errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("Insufficient treasury balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("Unauthorized withdrawal attempt")]
    UnauthorizedWithdrawal,
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
