//! Order book error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order {0} not found")]
    NotFound(u64),

    #[error("Caller does not own order {id}")]
    NotOwner { id: u64 },

    #[error("Redemption of {requested} exceeds order {id} remaining amount {remaining}")]
    ExceedsRemaining {
        id: u64,
        requested: u128,
        remaining: u128,
    },
}

pub type Result<T> = std::result::Result<T, OrderError>;
