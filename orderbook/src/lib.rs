//! Trade-round order book
//!
//! Holders list custody-held tokens at a fixed price per base unit and
//! other participants buy them out. Order ids are platform-wide and
//! monotonic starting at 1; a filled or removed order keeps its slot,
//! zeroed, so ids from past events stay resolvable. The book maintains
//! the `tokens_on_sell` aggregate, which always equals the sum of the
//! live orders' remaining amounts.

pub mod error;

pub use error::{OrderError, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use token::Address;

/// A single listing. `seller = None` marks a deleted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub seller: Option<Address>,
    pub remaining_amount: u128,
    pub price_per_token: u128,
}

/// Result of a partial or full fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    pub seller: Address,
    pub tokens: u128,
}

/// Result of removing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedOrder {
    pub seller: Address,
    pub refunded: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    orders: HashMap<u64, Order>,
    next_id: u64,
    tokens_on_sell: u128,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
            next_id: 1,
            tokens_on_sell: 0,
        }
    }

    /// Aggregate remaining amount across live orders.
    pub fn tokens_on_sell(&self) -> u128 {
        self.tokens_on_sell
    }

    pub fn order(&self, id: u64) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Recomputed sum of live orders, for invariant checks against
    /// [`OrderBook::tokens_on_sell`].
    pub fn live_total(&self) -> u128 {
        self.orders.values().map(|o| o.remaining_amount).sum()
    }

    /// List `amount` tokens and return the assigned order id.
    pub fn add(&mut self, seller: &str, amount: u128, price_per_token: u128) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.orders.insert(
            id,
            Order {
                seller: Some(seller.to_string()),
                remaining_amount: amount,
                price_per_token,
            },
        );
        self.tokens_on_sell += amount;
        id
    }

    /// Buy out of an order with `value` attached payment. The number of
    /// tokens bought is `value / price_per_token`, which must not
    /// exceed what the order still holds.
    pub fn fill(&mut self, id: u64, value: u128) -> Result<FillOutcome> {
        let order = match self.orders.get_mut(&id) {
            Some(order) if order.remaining_amount > 0 => order,
            _ => return Err(OrderError::NotFound(id)),
        };

        let tokens = value / order.price_per_token;
        if tokens > order.remaining_amount {
            return Err(OrderError::ExceedsRemaining {
                id,
                requested: tokens,
                remaining: order.remaining_amount,
            });
        }

        // seller is always set while remaining_amount > 0
        let seller = order.seller.clone().ok_or(OrderError::NotFound(id))?;
        order.remaining_amount -= tokens;
        self.tokens_on_sell -= tokens;

        Ok(FillOutcome { seller, tokens })
    }

    /// Delete `caller`'s order, refunding whatever is left unsold.
    /// Succeeds on a fully redeemed order with a zero refund.
    pub fn remove(&mut self, id: u64, caller: &str) -> Result<RemovedOrder> {
        let order = match self.orders.get_mut(&id) {
            Some(order) if order.seller.is_some() => order,
            _ => return Err(OrderError::NotFound(id)),
        };

        let seller = order.seller.clone().ok_or(OrderError::NotFound(id))?;
        if seller != caller {
            return Err(OrderError::NotOwner { id });
        }

        let refunded = order.remaining_amount;
        order.seller = None;
        order.remaining_amount = 0;
        order.price_per_token = 0;
        self.tokens_on_sell -= refunded;

        Ok(RemovedOrder { seller, refunded })
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
