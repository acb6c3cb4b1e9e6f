//! Referral reward splits

use serde::{Deserialize, Serialize};

use crate::constants::PERCENT;

/// Percentage rates paid to referral uplines.
///
/// Sale purchases pay `l1_sale_percent` to the buyer's direct inviter
/// and `l2_sale_percent` to the inviter's inviter. Trade redemptions
/// pay `trade_percent` to each of the seller's two upline tiers; the
/// seller always receives the payment minus both trade shares, whether
/// or not the uplines exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRates {
    pub l1_sale_percent: u64,
    pub l2_sale_percent: u64,
    pub trade_percent: u64,
}

impl Default for RewardRates {
    fn default() -> Self {
        Self {
            l1_sale_percent: 5,
            l2_sale_percent: 3,
            trade_percent: 3,
        }
    }
}

impl RewardRates {
    pub fn l1_sale_cut(&self, value: u128) -> u128 {
        value * self.l1_sale_percent as u128 / PERCENT
    }

    pub fn l2_sale_cut(&self, value: u128) -> u128 {
        value * self.l2_sale_percent as u128 / PERCENT
    }

    pub fn trade_cut(&self, value: u128) -> u128 {
        value * self.trade_percent as u128 / PERCENT
    }

    /// What the seller keeps from a redemption payment.
    pub fn seller_proceeds(&self, value: u128) -> u128 {
        value - 2 * self.trade_cut(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_split() {
        let rates = RewardRates::default();

        assert_eq!(rates.seller_proceeds(1000), 940);
        assert_eq!(rates.trade_cut(1000), 30);
    }

    #[test]
    fn test_sale_cuts() {
        let rates = RewardRates::default();
        let value = 100_000_000_000_000_000u128; // 0.1 native

        assert_eq!(rates.l1_sale_cut(value), 5_000_000_000_000_000);
        assert_eq!(rates.l2_sale_cut(value), 3_000_000_000_000_000);
    }

    #[test]
    fn test_rounding_stays_with_treasury() {
        let rates = RewardRates::default();

        // 99 * 3 / 100 rounds down; the seller-plus-cuts total never
        // exceeds the payment.
        let value = 99u128;
        let total = rates.seller_proceeds(value) + 2 * rates.trade_cut(value);
        assert!(total <= value);
    }
}
