//! Treasury pool management

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreasuryError};

/// Where a deposit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasurySource {
    SalePurchase,
    TradeRedemption,
}

/// One entry of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasuryRecord {
    Deposit { source: TreasurySource, amount: u128 },
    Payout { to: String, amount: u128 },
    Withdrawal { to: String, amount: u128 },
}

/// Native-currency pool with a full movement history.
///
/// Payouts and withdrawals are only accepted against funds already
/// deposited; the pool never goes negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreasuryPool {
    balance: u128,
    records: Vec<TreasuryRecord>,
}

impl TreasuryPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Funds currently held (and withdrawable) by the platform.
    pub fn balance(&self) -> u128 {
        self.balance
    }

    pub fn records(&self) -> &[TreasuryRecord] {
        &self.records
    }

    pub fn deposit(&mut self, source: TreasurySource, amount: u128) {
        self.balance += amount;
        self.records.push(TreasuryRecord::Deposit { source, amount });
    }

    /// Route a reward or proceeds share out of the pool.
    pub fn pay(&mut self, to: &str, amount: u128) -> Result<()> {
        self.debit(amount)?;
        self.records.push(TreasuryRecord::Payout {
            to: to.to_string(),
            amount,
        });
        Ok(())
    }

    /// Owner withdrawal of retained funds.
    pub fn withdraw(&mut self, to: &str, amount: u128) -> Result<()> {
        self.debit(amount)?;
        self.records.push(TreasuryRecord::Withdrawal {
            to: to.to_string(),
            amount,
        });
        Ok(())
    }

    /// Total native currency sent to `addr` through this pool.
    pub fn paid_to(&self, addr: &str) -> u128 {
        self.records
            .iter()
            .map(|r| match r {
                TreasuryRecord::Payout { to, amount } if to == addr => *amount,
                TreasuryRecord::Withdrawal { to, amount } if to == addr => *amount,
                _ => 0,
            })
            .sum()
    }

    fn debit(&mut self, amount: u128) -> Result<()> {
        if amount > self.balance {
            return Err(TreasuryError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
