//! Sale Platform Engine
//!
//! Token-distribution engine alternating between two phases: a Sale
//! round, where the platform sells freshly minted tokens at an
//! algorithmically set price, and a Trade round, where holders list
//! previously acquired tokens in an order book and buy from each other.
//! A two-tier referral ledger routes a share of every payment to the
//! buyer's (sale) or seller's (trade) uplines; unclaimed shares stay in
//! the treasury.
//!
//! All state lives in one owned [`SalePlatform`] aggregate; every
//! public operation takes the caller, the attached payment, and (where
//! round timing matters) the current timestamp explicitly. Execution is
//! serialized by the host: each operation fully applies or fully
//! discards its effects, and internal bookkeeping is always finalized
//! before any outbound payment is recorded.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod round;

pub use config::PlatformConfig;
pub use engine::SalePlatform;
pub use error::{PlatformError, Result};
pub use event::Event;
pub use round::{Round, RoundType};
