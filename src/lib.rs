//! A contract bridge deal engine with optional `no_std` support.
//!
//! The crate builds and shuffles a 52-card deck, deals it round-robin into
//! four 13-card hands, rotates the dealer, and values each hand by high card
//! points and an alternate score that rewards shape and top honors.
//!
//! # Example
//!
//! ```
//! use bridge_analyzer::{Game, Seat};
//!
//! let mut game = Game::new(42);
//! game.deal();
//! assert_eq!(game.dealer(), Seat::South);
//!
//! let north = game.hand(Seat::North).unwrap();
//! assert_eq!(north.len(), 13);
//! assert!(north.points() <= 37);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod seat;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, UNKNOWN_TOKEN};
pub use deck::Deck;
pub use error::{DealError, ParseError};
pub use game::{Game, Hands, SharedGame, TrickCount, distribute, verify_partition};
pub use hand::Hand;
pub use seat::Seat;
