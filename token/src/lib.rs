//! Fungible token collaborator
//!
//! The sale platform never implements token accounting itself; it drives
//! an external token through the [`TokenGateway`] trait: role-gated
//! minting and burning, transfers, and the allowance flow used to pull
//! sell-side inventory into custody. [`LedgerToken`] is an in-memory
//! implementation of that contract used by the platform test suites.

pub mod error;
pub mod ledger;

pub use error::{Result, TokenError};
pub use ledger::LedgerToken;

/// Account identifier, shared by every crate in the workspace.
pub type Address = String;

/// Operations the platform requires from the token component.
///
/// Mutating calls take the acting address explicitly; implementations
/// enforce balances, allowances, and the minter/burner role.
pub trait TokenGateway {
    fn balance_of(&self, owner: &str) -> u128;

    fn allowance(&self, owner: &str, spender: &str) -> u128;

    fn approve(&mut self, owner: &str, spender: &str, amount: u128);

    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<()>;

    /// Spend `spender`'s allowance to move tokens out of `owner`.
    fn transfer_from(&mut self, spender: &str, owner: &str, to: &str, amount: u128) -> Result<()>;

    /// Create new tokens. `minter` must hold the minter role.
    fn mint(&mut self, minter: &str, to: &str, amount: u128) -> Result<()>;

    /// Destroy tokens held by `from`. `burner` must hold the minter role.
    fn burn(&mut self, burner: &str, from: &str, amount: u128) -> Result<()>;
}
