//! Token error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Insufficient token balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("Insufficient allowance: requested {requested}, approved {approved}")]
    InsufficientAllowance { requested: u128, approved: u128 },

    #[error("Address {0} does not hold the minter role")]
    MissingMinterRole(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
