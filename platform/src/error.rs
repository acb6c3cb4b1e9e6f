//! Platform error taxonomy
//!
//! Every public operation fails with exactly one of these variants and
//! leaves no partial state behind. [`PlatformError::code`] exposes the
//! stable numbering callers can dispatch on.

use thiserror::Error;

use orderbook::OrderError;
use referral::ReferralError;
use token::TokenError;
use treasury::TreasuryError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Operation not allowed during the current round type")]
    WrongRoundType,

    #[error("Trade round has not ended yet")]
    TradeRoundNotEnded,

    #[error("Sale round has not ended yet")]
    SaleRoundNotEnded,

    #[error("Payment of {requested} exceeds the round's remaining supply worth {available}")]
    PurchaseExceedsSupply { requested: u128, available: u128 },

    #[error("Zero payment attached")]
    ZeroPayment,

    #[error(transparent)]
    Referral(#[from] ReferralError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Treasury(#[from] TreasuryError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl PlatformError {
    /// Stable error code, numbered after the reference deployment's
    /// `Platform: ERROR #N` strings. Failures of the external token
    /// collaborator have no number there and report 0.
    pub fn code(&self) -> u32 {
        match self {
            PlatformError::WrongRoundType => 1,
            PlatformError::Order(OrderError::NotFound(_)) => 2,
            PlatformError::Referral(ReferralError::AlreadyRegistered(_)) => 3,
            PlatformError::Referral(ReferralError::ReferrerNotRegistered(_)) => 4,
            PlatformError::TradeRoundNotEnded => 5,
            PlatformError::SaleRoundNotEnded => 6,
            PlatformError::PurchaseExceedsSupply { .. } => 7,
            PlatformError::Order(OrderError::ExceedsRemaining { .. }) => 8,
            PlatformError::Order(OrderError::NotOwner { .. }) => 9,
            PlatformError::ZeroPayment => 10,
            PlatformError::Treasury(TreasuryError::InsufficientBalance { .. }) => 11,
            PlatformError::Treasury(TreasuryError::UnauthorizedWithdrawal) => 12,
            PlatformError::Token(_) => 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;
