//! Hand representation and point valuation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::ParseError;

/// Bonus for holding both the ace and king of a suit.
const ACE_KING_BONUS: f32 = 2.0;
/// Bonus for holding the ace of a suit without its king.
const ACE_BONUS: f32 = 1.0;
/// Bonus for holding the king of a suit without its ace.
const KING_BONUS: f32 = 0.5;

/// The cards held by one seat, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Calculates the high card points of the hand.
    ///
    /// Ace = 4, King = 3, Queen = 2, Jack = 1.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    /// Returns the number of cards held in each suit, indexed by suit ordinal.
    #[must_use]
    pub fn suit_lengths(&self) -> [usize; 4] {
        let mut lengths = [0; 4];
        for card in &self.cards {
            lengths[card.suit.index()] += 1;
        }
        lengths
    }

    /// Returns the honor combination bonus for one suit.
    ///
    /// Ace and king together score 2, the ace alone 1, the king alone 0.5.
    #[must_use]
    pub fn honor_combo_bonus(&self, suit: Suit) -> f32 {
        let ace = self.contains(Card::new(suit, Rank::Ace));
        let king = self.contains(Card::new(suit, Rank::King));
        match (ace, king) {
            (true, true) => ACE_KING_BONUS,
            (true, false) => ACE_BONUS,
            (false, true) => KING_BONUS,
            (false, false) => 0.0,
        }
    }

    /// Calculates the alternate point score.
    ///
    /// High card points, plus the honor combination bonus of every suit, plus
    /// the lengths of the two longest suits.
    #[must_use]
    pub fn alternate_points(&self) -> f32 {
        let bonus: f32 = Suit::ALL
            .iter()
            .map(|&suit| self.honor_combo_bonus(suit))
            .sum();

        let mut lengths = self.suit_lengths();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        #[expect(
            clippy::cast_precision_loss,
            reason = "point totals are far below f32 precision limits"
        )]
        let base = self.points() as f32 + (lengths[0] + lengths[1]) as f32;

        base + bonus
    }

    /// Returns the ranks held in `suit`, ascending.
    #[must_use]
    pub fn ranks_in(&self, suit: Suit) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self
            .cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect();
        ranks.sort_unstable();
        ranks
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " HCP {}", self.points())?;
        writeln!(f, " AltPts {:.1}", self.alternate_points())?;
        for suit in Suit::ALL {
            write!(f, " {suit}: ")?;
            for rank in self.ranks_in(suit) {
                write!(f, " {rank}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses whitespace-separated card tokens, e.g. `"AS KS 9H"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from_cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}
