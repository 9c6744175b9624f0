//! Card types and their canonical text forms.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Token rendered for an ordinal outside an enumeration's domain.
pub const UNKNOWN_TOKEN: &str = "?";

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a fully dealt hand.
pub const HAND_SIZE: usize = 13;

/// Card suit, ordered Club < Diamond < Heart < Spade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the suit with the given ordinal, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Club),
            1 => Some(Self::Diamond),
            2 => Some(Self::Heart),
            3 => Some(Self::Spade),
            _ => None,
        }
    }

    /// Returns the ordinal of this suit (0 for clubs through 3 for spades).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-letter token for this suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Club => "C",
            Self::Diamond => "D",
            Self::Heart => "H",
            Self::Spade => "S",
        }
    }

    /// Renders an arbitrary ordinal, falling back to [`UNKNOWN_TOKEN`].
    #[must_use]
    pub fn token_of(index: usize) -> &'static str {
        Self::from_index(index).map_or(UNKNOWN_TOKEN, Self::as_str)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" => Ok(Self::Club),
            "D" | "d" => Ok(Self::Diamond),
            "H" | "h" => Ok(Self::Heart),
            "S" | "s" => Ok(Self::Spade),
            _ => Err(ParseError::InvalidSuit),
        }
    }
}

/// Card rank, ordered Two < Three < ... < King < Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank with the given ordinal (0 for two through 12 for ace).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the ordinal of this rank.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical token for this rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Renders an arbitrary ordinal, falling back to [`UNKNOWN_TOKEN`].
    #[must_use]
    pub fn token_of(index: usize) -> &'static str {
        Self::from_index(index).map_or(UNKNOWN_TOKEN, Self::as_str)
    }

    /// Returns the high card point value of this rank.
    ///
    /// Ace counts 4, King 3, Queen 2, Jack 1 and everything else 0.
    #[must_use]
    pub const fn hcp(self) -> u32 {
        match self {
            Self::Ace => 4,
            Self::King => 3,
            Self::Queen => 2,
            Self::Jack => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" | "T" | "t" => Ok(Self::Ten),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            "A" | "a" => Ok(Self::Ace),
            _ => Err(ParseError::InvalidRank),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a rank token followed by a suit letter, e.g. `AS` or `10H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 2 || !s.is_ascii() {
            return Err(ParseError::InvalidCard);
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn suits_and_ranks_are_ordered() {
        assert!(Suit::Club < Suit::Diamond);
        assert!(Suit::Heart < Suit::Spade);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::King < Rank::Ace);
        assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tokens_match_canonical_text() {
        assert_eq!(Suit::ALL.map(Suit::as_str), ["C", "D", "H", "S"]);
        assert_eq!(
            Rank::ALL.map(Rank::as_str),
            ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"]
        );
    }

    #[test]
    fn out_of_range_ordinals_render_unknown() {
        assert_eq!(Suit::token_of(2), "H");
        assert_eq!(Suit::token_of(4), UNKNOWN_TOKEN);
        assert_eq!(Rank::token_of(12), "A");
        assert_eq!(Rank::token_of(13), UNKNOWN_TOKEN);
    }

    #[test]
    fn parse_cards() {
        assert_eq!(
            "AS".parse::<Card>(),
            Ok(Card::new(Suit::Spade, Rank::Ace))
        );
        assert_eq!(
            "10h".parse::<Card>(),
            Ok(Card::new(Suit::Heart, Rank::Ten))
        );
        assert_eq!(
            "TD".parse::<Card>(),
            Ok(Card::new(Suit::Diamond, Rank::Ten))
        );
        assert_eq!("A".parse::<Card>(), Err(ParseError::InvalidCard));
        assert_eq!("1S".parse::<Card>(), Err(ParseError::InvalidRank));
        assert_eq!("AX".parse::<Card>(), Err(ParseError::InvalidSuit));
    }

    #[test]
    fn card_display_round_trips() {
        let card = Card::new(Suit::Club, Rank::Ten);
        assert_eq!(card.to_string(), "10C");
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
}
