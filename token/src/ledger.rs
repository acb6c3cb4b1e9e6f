//! In-memory token ledger

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{Result, TokenError};
use crate::{Address, TokenGateway};

/// Balance-map token with allowances and a minter role set.
///
/// The admin passed to [`LedgerToken::new`] starts with the minter role
/// and may grant it to further addresses, mirroring a role-gated
/// mintable token deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerToken {
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    minters: HashSet<Address>,
    total_supply: u128,
}

impl LedgerToken {
    pub fn new(admin: &str) -> Self {
        let mut minters = HashSet::new();
        minters.insert(admin.to_string());

        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            minters,
            total_supply: 0,
        }
    }

    pub fn grant_minter(&mut self, addr: &str) {
        self.minters.insert(addr.to_string());
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    fn debit(&mut self, from: &str, amount: u128) -> Result<()> {
        let balance = self.balances.entry(from.to_string()).or_insert(0);
        if *balance < amount {
            return Err(TokenError::InsufficientBalance {
                requested: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    fn credit(&mut self, to: &str, amount: u128) {
        *self.balances.entry(to.to_string()).or_insert(0) += amount;
    }
}

impl TokenGateway for LedgerToken {
    fn balance_of(&self, owner: &str) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &str, spender: &str) -> u128 {
        self.allowances
            .get(&(owner.to_string(), spender.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn approve(&mut self, owner: &str, spender: &str, amount: u128) {
        self.allowances
            .insert((owner.to_string(), spender.to_string()), amount);
    }

    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<()> {
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    fn transfer_from(&mut self, spender: &str, owner: &str, to: &str, amount: u128) -> Result<()> {
        let key = (owner.to_string(), spender.to_string());
        let approved = self.allowances.get(&key).copied().unwrap_or(0);
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                requested: amount,
                approved,
            });
        }

        self.debit(owner, amount)?;
        self.allowances.insert(key, approved - amount);
        self.credit(to, amount);
        Ok(())
    }

    fn mint(&mut self, minter: &str, to: &str, amount: u128) -> Result<()> {
        if !self.minters.contains(minter) {
            return Err(TokenError::MissingMinterRole(minter.to_string()));
        }
        self.credit(to, amount);
        self.total_supply += amount;
        Ok(())
    }

    fn burn(&mut self, burner: &str, from: &str, amount: u128) -> Result<()> {
        if !self.minters.contains(burner) {
            return Err(TokenError::MissingMinterRole(burner.to_string()));
        }
        self.debit(from, amount)?;
        self.total_supply -= amount;
        Ok(())
    }
}
