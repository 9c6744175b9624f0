//! Error types for dealing and parsing.

use thiserror::Error;

use crate::card::Card;
use crate::seat::Seat;

/// Invariant violations detected while partitioning a deck.
///
/// A deal that fails any of these checks is never exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck does not hold exactly one deck's worth of cards.
    #[error("deck holds {found} cards, expected {expected}")]
    DeckSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards actually present.
        found: usize,
    },
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// A card of the canonical deck was not dealt.
    #[error("card {0} was not dealt")]
    MissingCard(Card),
    /// A seat received the wrong number of cards.
    #[error("seat {seat} holds {found} cards, expected 13")]
    HandSize {
        /// The offending seat.
        seat: Seat,
        /// Number of cards the seat holds.
        found: usize,
    },
    /// A seat received no hand at all.
    #[error("seat {0} has no hand")]
    MissingSeat(Seat),
}

/// Errors that can occur while parsing card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unrecognized suit letter.
    #[error("invalid suit")]
    InvalidSuit,
    /// Unrecognized rank token.
    #[error("invalid rank")]
    InvalidRank,
    /// Unrecognized seat letter.
    #[error("invalid seat")]
    InvalidSeat,
    /// Card token too short or not ASCII.
    #[error("invalid card")]
    InvalidCard,
}
