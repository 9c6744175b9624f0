//! Partitioning a shuffled deck into four hands.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::card::{DECK_SIZE, HAND_SIZE};
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::seat::Seat;

/// The four hands of a deal, keyed by seat.
pub type Hands = HashMap<Seat, Hand>;

/// Deals `deck` round-robin into four hands.
///
/// The card at position `i` goes to seat `i % 4`, so North receives
/// positions 0, 4, 8, ... in that order.
///
/// # Errors
///
/// Returns an error if the deck does not hold exactly 52 distinct cards.
pub fn distribute(deck: &Deck) -> Result<Hands, DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::DeckSize {
            expected: DECK_SIZE,
            found: deck.len(),
        });
    }

    let mut seen = HashSet::with_capacity(DECK_SIZE);
    if let Some(&card) = deck.into_iter().find(|&&card| !seen.insert(card)) {
        return Err(DealError::DuplicateCard(card));
    }

    let mut hands: Hands = Seat::ALL.iter().map(|&seat| (seat, Hand::new())).collect();
    for (position, &card) in deck.into_iter().enumerate() {
        let seat = Seat::ALL[position % Seat::ALL.len()];
        if let Some(hand) = hands.get_mut(&seat) {
            hand.add_card(card);
        }
    }

    verify_partition(&hands)?;
    Ok(hands)
}

/// Checks that `hands` is a complete partition of the canonical deck.
///
/// # Errors
///
/// Returns an error if a seat is missing, a hand does not hold 13 cards, or
/// the hands together do not cover the canonical deck exactly once.
pub fn verify_partition(hands: &Hands) -> Result<(), DealError> {
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for seat in Seat::ALL {
        let hand = hands.get(&seat).ok_or(DealError::MissingSeat(seat))?;
        if hand.len() != HAND_SIZE {
            return Err(DealError::HandSize {
                seat,
                found: hand.len(),
            });
        }
        for &card in hand.cards() {
            if !seen.insert(card) {
                return Err(DealError::DuplicateCard(card));
            }
        }
    }

    let canonical = Deck::canonical();
    match canonical.cards().iter().find(|card| !seen.contains(*card)) {
        Some(&card) => Err(DealError::MissingCard(card)),
        None => Ok(()),
    }
}
