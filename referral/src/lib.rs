//! Referral ledger
//!
//! Tracks who invited whom. Each address registers at most once, either
//! with no referrer (the root of a referral tree) or with an address
//! that is itself already registered. Reward routing asks for the one-
//! and two-hop uplines of a participant; a missing upline simply means
//! that reward tier is not paid.

pub mod error;

pub use error::{ReferralError, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use token::Address;

/// A registered participant. Presence in the ledger means registered;
/// `referrer = None` marks a referral-tree root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRecord {
    pub referrer: Option<Address>,
}

/// Registration table keyed by address. Records are immutable once
/// written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferralLedger {
    records: HashMap<Address, ReferralRecord>,
}

impl ReferralLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, addr: &str) -> bool {
        self.records.contains_key(addr)
    }

    pub fn record(&self, addr: &str) -> Option<&ReferralRecord> {
        self.records.get(addr)
    }

    pub fn register(&mut self, caller: &str, referrer: Option<&str>) -> Result<()> {
        if self.is_registered(caller) {
            return Err(ReferralError::AlreadyRegistered(caller.to_string()));
        }
        if let Some(referrer) = referrer {
            if !self.is_registered(referrer) {
                return Err(ReferralError::ReferrerNotRegistered(referrer.to_string()));
            }
        }

        self.records.insert(
            caller.to_string(),
            ReferralRecord {
                referrer: referrer.map(str::to_string),
            },
        );
        Ok(())
    }

    /// Direct inviter of `addr`, if any.
    pub fn referrer_of(&self, addr: &str) -> Option<&str> {
        self.records
            .get(addr)
            .and_then(|r| r.referrer.as_deref())
    }

    /// Level-1 and level-2 uplines of `addr`.
    pub fn uplines(&self, addr: &str) -> (Option<Address>, Option<Address>) {
        let l1 = self.referrer_of(addr).map(str::to_string);
        let l2 = l1
            .as_deref()
            .and_then(|l1| self.referrer_of(l1))
            .map(str::to_string);
        (l1, l2)
    }
}
