//! Sale Platform Economics Module
//!
//! Implements the numeric policy of the platform:
//! - Sale-round price growth between rounds
//! - Purchase and redemption amount math
//! - Referral reward splits (sale and trade)
//!
//! All arithmetic is fixed-point `u128` over base units; fractional
//! shares round down and the remainder stays with the treasury.

pub mod pricing;
pub mod rewards;

pub use pricing::{next_price, PricingParams};
pub use rewards::RewardRates;

/// Economic constants
pub mod constants {
    /// Token base units per whole token (18 decimal places)
    pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

    /// Denominator for percentage-based reward rates
    pub const PERCENT: u128 = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_economics_constants() {
        assert_eq!(constants::TOKEN_UNIT, 10u128.pow(18));
        assert_eq!(constants::PERCENT, 100);
    }
}
