//! Referral error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferralError {
    #[error("Address {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Referrer {0} is not registered")]
    ReferrerNotRegistered(String),
}

pub type Result<T> = std::result::Result<T, ReferralError>;
