//! Game engine and state management.

use core::fmt;

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Suit;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::seat::Seat;

pub mod dealer;
mod shared;
pub mod state;

pub use dealer::{Hands, distribute, verify_partition};
pub use shared::SharedGame;
pub use state::TrickCount;

/// A bridge table that deals and values hands.
///
/// The game owns its random source, the four hands, and the dealer marker.
/// Every call to [`Game::deal`] clears the table, shuffles a fresh deck,
/// splits it between the seats and passes the deal to the next seat.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Hands currently on the table (empty after a reset).
    hands: Hands,
    /// Seat credited with the current deal.
    dealer: Seat,
    /// Reserved for trick play.
    tricks: TrickCount,
    /// Reserved for the auction.
    contract_suit: Option<Suit>,
    /// Number of deals performed.
    deals: u64,
    /// Random number generator.
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed and deals the first hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bridge_analyzer::{Game, Seat};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.dealer(), Seat::East);
    /// assert_eq!(game.hands().len(), 4);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from the operating system and deals the first hands.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source is unavailable.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game drawing randomness from `rng` and deals the first hands.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            hands: HashMap::new(),
            dealer: Seat::North,
            tricks: TrickCount::default(),
            contract_suit: None,
            deals: 0,
            rng,
        };
        game.deal();
        game
    }

    /// Clears the table and deals four fresh hands, then advances the dealer.
    ///
    /// # Panics
    ///
    /// Panics if the shuffled deck fails to partition into four 13-card hands.
    /// This means the deck builder or random source is broken, and a partial
    /// deal is never exposed.
    pub fn deal(&mut self) {
        if let Err(err) = self.try_deal() {
            panic!("corrupted deal: {err}");
        }
    }

    fn try_deal(&mut self) -> Result<(), DealError> {
        self.reset();
        let deck = Deck::shuffled(&mut self.rng);
        self.hands = dealer::distribute(&deck)?;
        self.dealer = self.dealer.next();
        self.deals += 1;
        tracing::debug!(dealer = %self.dealer, deal = self.deals, "dealt new hands");
        Ok(())
    }
}

impl<R> Game<R> {
    /// Removes every hand and zeroes the trick counters.
    ///
    /// The dealer marker is left unchanged.
    pub fn reset(&mut self) {
        self.hands.clear();
        self.tricks.clear();
        tracing::debug!(dealer = %self.dealer, "table reset");
    }

    /// Returns the hand held by `seat`, if one has been dealt.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands.get(&seat)
    }

    /// Returns all hands on the table.
    #[must_use]
    pub const fn hands(&self) -> &Hands {
        &self.hands
    }

    /// Returns the current dealer.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the trick counters.
    #[must_use]
    pub const fn tricks(&self) -> TrickCount {
        self.tricks
    }

    /// Returns the contract suit, if a contract has been set.
    #[must_use]
    pub const fn contract_suit(&self) -> Option<Suit> {
        self.contract_suit
    }

    /// Returns the number of deals performed since construction.
    #[must_use]
    pub const fn deal_count(&self) -> u64 {
        self.deals
    }

    /// Renders every seat's hand, North first.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<R> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = Hand::new();
        for seat in Seat::ALL {
            let hand = self.hands.get(&seat).unwrap_or(&empty);
            writeln!(f, "{seat}:\n{hand}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_dealt_once() {
        let game = Game::new(1);
        assert_eq!(game.dealer(), Seat::East);
        assert_eq!(game.deal_count(), 1);
        assert_eq!(game.tricks(), TrickCount::default());
        assert_eq!(game.contract_suit(), None);
        for seat in Seat::ALL {
            assert_eq!(game.hand(seat).map(Hand::len), Some(13));
        }
    }

    #[test]
    fn reset_keeps_dealer() {
        let mut game = Game::new(2);
        game.deal();
        assert_eq!(game.dealer(), Seat::South);

        game.reset();
        assert!(game.hands().is_empty());
        assert!(game.hand(Seat::North).is_none());
        assert_eq!(game.dealer(), Seat::South);
        assert_eq!(game.tricks(), TrickCount::default());
    }

    #[test]
    fn same_seed_same_deal() {
        let a = Game::new(99);
        let b = Game::new(99);
        assert_eq!(a.hands(), b.hands());
        assert_eq!(a.render(), b.render());
    }
}
