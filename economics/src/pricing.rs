//! Sale price growth policy
//!
//! Each time a Trade round closes, the next Sale price is derived from
//! the previous one as `prev * growth_numerator / growth_denominator +
//! price_increment`. With the default coefficients (3% growth plus a
//! flat 4e12 native units) a starting price of 1e13 becomes 1.43e13
//! after one round. The formula does not depend on traded volume, so it
//! is monotonically non-decreasing in it, and it is strictly positive
//! for any positive starting price.

use serde::{Deserialize, Serialize};

/// Coefficients of the price growth formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingParams {
    pub growth_numerator: u64,
    pub growth_denominator: u64,
    /// Flat per-round increase, in smallest native-currency units.
    pub price_increment: u64,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            growth_numerator: 103,
            growth_denominator: 100,
            price_increment: 4_000_000_000_000,
        }
    }
}

/// Compute the price for the next Sale round.
pub fn next_price(prev_price: u128, params: &PricingParams) -> u128 {
    prev_price * params.growth_numerator as u128 / params.growth_denominator as u128
        + params.price_increment as u128
}
