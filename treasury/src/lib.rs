//! Sale Platform Treasury Module
//!
//! Holds the platform's native-currency balance. Every sale purchase
//! and trade redemption deposits its payment here; seller proceeds and
//! referral rewards are then paid out of the pool, and whatever share
//! has no claimant stays in it. The owner withdrawal path drains the
//! retained balance. All movements are kept in an audit trail.

pub mod error;
pub mod pool;

pub use error::{Result, TreasuryError};
pub use pool::{TreasuryPool, TreasuryRecord, TreasurySource};
