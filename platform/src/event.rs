//! Engine events
//!
//! Every state-changing operation appends to the engine's event log;
//! the host drains it with [`crate::SalePlatform::take_events`] after
//! each call.

use serde::{Deserialize, Serialize};

use token::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Registered {
        user: Address,
        referrer: Option<Address>,
    },
    /// Emitted on every round transition for the round that just
    /// ended. For a Sale round `volume` is the amount sold; for a
    /// Trade round `price` is the price the ended round traded under
    /// and `supply` is 0.
    RoundClosed {
        round_id: u64,
        price: u128,
        supply: u128,
        volume: u128,
    },
    TokensPurchased {
        buyer: Address,
        round_id: u64,
        amount: u128,
    },
    OrderAdded {
        seller: Address,
        id: u64,
        amount: u128,
        price: u128,
    },
    OrderRedeemed {
        seller: Address,
        id: u64,
        amount: u128,
        round_id: u64,
    },
    OrderRemoved {
        seller: Address,
        id: u64,
        amount: u128,
        round_id: u64,
    },
}
