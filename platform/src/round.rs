//! Round history types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundType {
    Sale,
    Trade,
}

/// One round of the platform's life. The engine keeps rounds as an
/// append-only sequence; the last entry is the current round, earlier
/// entries are immutable history, and a round's id is its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    Sale {
        /// Native units per whole token.
        price: u128,
        /// Base units offered this round.
        supply: u128,
        end_time: u64,
        /// Base units sold so far.
        sold: u128,
    },
    Trade {
        end_time: u64,
        /// Base units redeemed from orders this round.
        total_volume: u128,
        order_count: u64,
    },
}

impl Round {
    pub fn round_type(&self) -> RoundType {
        match self {
            Round::Sale { .. } => RoundType::Sale,
            Round::Trade { .. } => RoundType::Trade,
        }
    }

    /// Timestamp after which the round may be closed. The round stays
    /// open past it until a transition is actually requested.
    pub fn end_time(&self) -> u64 {
        match self {
            Round::Sale { end_time, .. } => *end_time,
            Round::Trade { end_time, .. } => *end_time,
        }
    }
}
