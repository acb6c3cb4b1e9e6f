//! The platform engine
//!
//! [`SalePlatform`] owns the round history, order book, referral
//! ledger, treasury pool, and the token collaborator, and exposes the
//! whole public operation surface. Operations are gated by the current
//! round's type and end time; every guard violation aborts the call
//! before any state is touched, and internal bookkeeping always
//! completes before treasury payouts are recorded.

use log::{debug, info};

use economics::constants::TOKEN_UNIT;
use economics::next_price;
use orderbook::{Order, OrderBook};
use referral::ReferralLedger;
use token::TokenGateway;
use treasury::{TreasuryError, TreasuryPool, TreasurySource};

use crate::config::PlatformConfig;
use crate::error::{PlatformError, Result};
use crate::event::Event;
use crate::round::{Round, RoundType};

pub struct SalePlatform<T: TokenGateway> {
    config: PlatformConfig,
    token: T,
    rounds: Vec<Round>,
    book: OrderBook,
    referrals: ReferralLedger,
    treasury: TreasuryPool,
    last_token_price: u128,
    events: Vec<Event>,
}

impl<T: TokenGateway> SalePlatform<T> {
    /// Construct the platform and open Sale round 0, minting the
    /// configured starting supply into custody. The custody address
    /// must already hold the token's minter role.
    pub fn new(config: PlatformConfig, mut token: T, now: u64) -> Result<Self> {
        let price = config.start_price as u128;
        let supply = config.start_supply_tokens as u128 * TOKEN_UNIT;
        token.mint(&config.custody, &config.custody, supply)?;

        let rounds = vec![Round::Sale {
            price,
            supply,
            end_time: now + config.round_duration,
            sold: 0,
        }];
        info!("platform constructed; sale round 0 open at price {price}");

        Ok(Self {
            config,
            token,
            rounds,
            book: OrderBook::new(),
            referrals: ReferralLedger::new(),
            treasury: TreasuryPool::new(),
            last_token_price: price,
            events: Vec::new(),
        })
    }

    // --- accessors -------------------------------------------------

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn round_id(&self) -> u64 {
        (self.rounds.len() - 1) as u64
    }

    pub fn current_round(&self) -> &Round {
        self.rounds.last().expect("round history is never empty")
    }

    pub fn current_round_type(&self) -> RoundType {
        self.current_round().round_type()
    }

    /// Any round by id, current or historical.
    pub fn round(&self, id: u64) -> Option<&Round> {
        self.rounds.get(id as usize)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn last_token_price(&self) -> u128 {
        self.last_token_price
    }

    pub fn tokens_on_sell(&self) -> u128 {
        self.book.tokens_on_sell()
    }

    pub fn order(&self, id: u64) -> Option<&Order> {
        self.book.order(id)
    }

    pub fn order_book(&self) -> &OrderBook {
        &self.book
    }

    pub fn referrals(&self) -> &ReferralLedger {
        &self.referrals
    }

    pub fn treasury(&self) -> &TreasuryPool {
        &self.treasury
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    /// Mutable access to the token collaborator, e.g. for the approve
    /// step that precedes [`SalePlatform::add_order`].
    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // --- referral program ------------------------------------------

    pub fn register(&mut self, caller: &str, referrer: Option<&str>) -> Result<()> {
        self.referrals.register(caller, referrer)?;
        debug!("registered {caller}, referrer {referrer:?}");
        self.events.push(Event::Registered {
            user: caller.to_string(),
            referrer: referrer.map(str::to_string),
        });
        Ok(())
    }

    // --- round transitions -----------------------------------------

    /// Close the current Sale round and open a Trade round. Unsold
    /// inventory is burned; the platform never carries sale supply
    /// across rounds.
    pub fn start_trade_round(&mut self, now: u64) -> Result<()> {
        let (price, supply, end_time, sold) = match self.current_round() {
            Round::Sale {
                price,
                supply,
                end_time,
                sold,
            } => (*price, *supply, *end_time, *sold),
            Round::Trade { .. } => return Err(PlatformError::WrongRoundType),
        };
        if now < end_time {
            return Err(PlatformError::SaleRoundNotEnded);
        }

        let unsold = supply - sold;
        if unsold > 0 {
            self.token
                .burn(&self.config.custody, &self.config.custody, unsold)?;
        }

        let closed_id = self.round_id();
        self.rounds.push(Round::Trade {
            end_time: now + self.config.round_duration,
            total_volume: 0,
            order_count: 0,
        });
        info!(
            "sale round {closed_id} closed ({sold} of {supply} sold); trade round {} open",
            self.round_id()
        );
        self.events.push(Event::RoundClosed {
            round_id: closed_id,
            price,
            supply,
            volume: sold,
        });
        Ok(())
    }

    /// Close the current Trade round. With observed volume the next
    /// Sale round opens at the recomputed price, its supply minted into
    /// custody; with zero volume a fresh Trade round opens instead: no
    /// demand signal, no new supply, but the recomputed price is still
    /// recorded for the next attempt.
    pub fn start_sale_round(&mut self, now: u64) -> Result<()> {
        let (end_time, total_volume) = match self.current_round() {
            Round::Trade {
                end_time,
                total_volume,
                ..
            } => (*end_time, *total_volume),
            Round::Sale { .. } => return Err(PlatformError::WrongRoundType),
        };
        if now < end_time {
            return Err(PlatformError::TradeRoundNotEnded);
        }

        let new_price = next_price(self.last_token_price, &self.config.pricing);
        if total_volume > 0 {
            // the next round re-issues what changed hands in this one
            self.token
                .mint(&self.config.custody, &self.config.custody, total_volume)?;
        }

        let closed_id = self.round_id();
        self.events.push(Event::RoundClosed {
            round_id: closed_id,
            price: self.last_token_price,
            supply: 0,
            volume: total_volume,
        });
        self.last_token_price = new_price;

        let end_time = now + self.config.round_duration;
        if total_volume == 0 {
            self.rounds.push(Round::Trade {
                end_time,
                total_volume: 0,
                order_count: 0,
            });
            info!(
                "trade round {closed_id} closed without volume; trade round {} open at recorded price {new_price}",
                self.round_id()
            );
        } else {
            self.rounds.push(Round::Sale {
                price: new_price,
                supply: total_volume,
                end_time,
                sold: 0,
            });
            info!(
                "trade round {closed_id} closed with volume {total_volume}; sale round {} open at price {new_price}",
                self.round_id()
            );
        }
        Ok(())
    }

    // --- sale round ------------------------------------------------

    /// Buy `value / price` whole tokens' worth of base units from the
    /// current Sale round's supply.
    pub fn buy_token(&mut self, caller: &str, value: u128) -> Result<()> {
        let round_id = self.round_id();
        let (price, supply, sold) = match self.current_round() {
            Round::Sale {
                price,
                supply,
                sold,
                ..
            } => (*price, *supply, *sold),
            Round::Trade { .. } => return Err(PlatformError::WrongRoundType),
        };
        if value == 0 {
            return Err(PlatformError::ZeroPayment);
        }

        let available = (supply - sold) * price / TOKEN_UNIT;
        if value > available {
            return Err(PlatformError::PurchaseExceedsSupply {
                requested: value,
                available,
            });
        }
        let tokens = value * TOKEN_UNIT / price;

        if let Round::Sale { sold, .. } = self.current_round_mut() {
            *sold += tokens;
        }

        self.token.transfer(&self.config.custody, caller, tokens)?;

        let (l1, l2) = self.referrals.uplines(caller);
        self.treasury.deposit(TreasurySource::SalePurchase, value);
        if let Some(l1) = l1 {
            let cut = self.config.rewards.l1_sale_cut(value);
            if cut > 0 {
                self.treasury.pay(&l1, cut)?;
            }
        }
        if let Some(l2) = l2 {
            let cut = self.config.rewards.l2_sale_cut(value);
            if cut > 0 {
                self.treasury.pay(&l2, cut)?;
            }
        }

        debug!("{caller} bought {tokens} base units in round {round_id}");
        self.events.push(Event::TokensPurchased {
            buyer: caller.to_string(),
            round_id,
            amount: tokens,
        });
        Ok(())
    }

    // --- trade round -----------------------------------------------

    /// List `amount` base units at `price_per_token` native units
    /// each. Pulls the tokens into custody via the caller's allowance
    /// and returns the assigned order id.
    pub fn add_order(&mut self, caller: &str, amount: u128, price_per_token: u128) -> Result<u64> {
        if self.current_round_type() != RoundType::Trade {
            return Err(PlatformError::WrongRoundType);
        }
        if amount == 0 || price_per_token == 0 {
            return Err(PlatformError::ZeroPayment);
        }

        let custody = self.config.custody.clone();
        self.token.transfer_from(&custody, caller, &custody, amount)?;

        let id = self.book.add(caller, amount, price_per_token);
        if let Round::Trade { order_count, .. } = self.current_round_mut() {
            *order_count += 1;
        }

        debug!("order {id}: {caller} listed {amount} at {price_per_token}");
        self.events.push(Event::OrderAdded {
            seller: caller.to_string(),
            id,
            amount,
            price: price_per_token,
        });
        Ok(id)
    }

    /// Buy out of order `id` with `value` attached payment. The seller
    /// receives the payment minus both trade reward shares; each share
    /// goes to the seller's upline of that tier when present, and stays
    /// in the treasury otherwise.
    pub fn redeem_order(&mut self, caller: &str, id: u64, value: u128) -> Result<()> {
        let round_id = self.round_id();
        if self.current_round_type() != RoundType::Trade {
            return Err(PlatformError::WrongRoundType);
        }
        if value == 0 {
            return Err(PlatformError::ZeroPayment);
        }

        let fill = self.book.fill(id, value)?;
        if let Round::Trade { total_volume, .. } = self.current_round_mut() {
            *total_volume += fill.tokens;
        }

        self.token
            .transfer(&self.config.custody, caller, fill.tokens)?;

        let rates = self.config.rewards;
        self.treasury.deposit(TreasurySource::TradeRedemption, value);
        self.treasury.pay(&fill.seller, rates.seller_proceeds(value))?;
        let cut = rates.trade_cut(value);
        if cut > 0 {
            let (l1, l2) = self.referrals.uplines(&fill.seller);
            if let Some(l1) = l1 {
                self.treasury.pay(&l1, cut)?;
            }
            if let Some(l2) = l2 {
                self.treasury.pay(&l2, cut)?;
            }
        }

        debug!("order {id}: {caller} redeemed {} base units", fill.tokens);
        self.events.push(Event::OrderRedeemed {
            seller: fill.seller,
            id,
            amount: fill.tokens,
            round_id,
        });
        Ok(())
    }

    /// Delete the caller's order and refund whatever it still holds.
    /// Succeeds with a zero refund on a fully redeemed order.
    pub fn remove_order(&mut self, caller: &str, id: u64) -> Result<()> {
        let round_id = self.round_id();
        let removed = self.book.remove(id, caller)?;

        if removed.refunded > 0 {
            self.token
                .transfer(&self.config.custody, &removed.seller, removed.refunded)?;
        }

        debug!("order {id} removed, {} base units refunded", removed.refunded);
        self.events.push(Event::OrderRemoved {
            seller: removed.seller,
            id,
            amount: removed.refunded,
            round_id,
        });
        Ok(())
    }

    // --- treasury --------------------------------------------------

    /// Owner-only withdrawal of retained native funds.
    pub fn withdraw(&mut self, caller: &str, to: &str, amount: u128) -> Result<()> {
        if caller != self.config.owner {
            return Err(TreasuryError::UnauthorizedWithdrawal.into());
        }
        self.treasury.withdraw(to, amount)?;
        info!("owner withdrew {amount} to {to}");
        Ok(())
    }

    fn current_round_mut(&mut self) -> &mut Round {
        self.rounds.last_mut().expect("round history is never empty")
    }
}
