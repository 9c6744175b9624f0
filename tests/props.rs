//! Property and distribution tests for shuffling, dealing and valuation.

#![expect(clippy::cast_precision_loss, reason = "card counts fit easily in a float")]

use std::collections::HashSet;

use bridge_analyzer::{Card, DECK_SIZE, Deck, Game, Hand, Seat, distribute, verify_partition};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE).prop_map(|i| Deck::canonical()[i])
}

fn any_hand() -> impl Strategy<Value = Hand> {
    proptest::sample::subsequence(Deck::canonical().into_cards(), 0..=13)
        .prop_shuffle()
        .prop_map(Hand::from_cards)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Shuffling never adds, drops or duplicates a card.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let shuffled = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut cards = shuffled.into_cards();
        cards.sort_by_key(|c| (c.suit, c.rank));
        prop_assert_eq!(cards, Deck::canonical().into_cards());
    }

    /// Shuffling a malformed deck keeps its multiset.
    #[test]
    fn prop_shuffle_preserves_multiset(cards in proptest::collection::vec(any_card(), 0..80), seed in any::<u64>()) {
        let mut expected = cards.clone();
        let shuffled = Deck::from_cards(cards).shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut actual = shuffled.into_cards();
        expected.sort_by_key(|c| (c.suit, c.rank));
        actual.sort_by_key(|c| (c.suit, c.rank));
        prop_assert_eq!(actual, expected);
    }

    /// Every deal is a partition of the canonical deck.
    #[test]
    fn prop_deal_partitions_deck(seed in any::<u64>(), redeals in 0usize..6) {
        let mut game = Game::new(seed);
        for _ in 0..redeals {
            game.deal();
        }
        prop_assert_eq!(verify_partition(game.hands()), Ok(()));

        let dealt: HashSet<Card> = game.hands().values().flat_map(|h| h.cards().iter().copied()).collect();
        prop_assert_eq!(dealt.len(), DECK_SIZE);
    }

    /// The dealer advances exactly one seat per deal.
    #[test]
    fn prop_dealer_rotation(seed in any::<u64>(), redeals in 0usize..12) {
        let mut game = Game::new(seed);
        for _ in 0..redeals {
            game.deal();
        }
        let expected = Seat::ALL[(redeals + 1) % 4];
        prop_assert_eq!(game.dealer(), expected);
    }

    /// Reset never moves the dealer.
    #[test]
    fn prop_reset_keeps_dealer(seed in any::<u64>(), redeals in 0usize..8) {
        let mut game = Game::new(seed);
        for _ in 0..redeals {
            game.deal();
        }
        let dealer = game.dealer();
        game.reset();
        prop_assert!(game.hands().is_empty());
        prop_assert_eq!(game.dealer(), dealer);
    }

    /// Alternate points bound: at least HCP plus the two longest suits, at most 8 more.
    #[test]
    fn prop_alternate_points_bounds(hand in any_hand()) {
        let mut lengths = hand.suit_lengths();
        lengths.sort_unstable();
        let floor = hand.points() as f32 + (lengths[3] + lengths[2]) as f32;
        let alt = hand.alternate_points();
        prop_assert!(alt >= floor);
        prop_assert!(alt <= floor + 8.0);
        prop_assert!(hand.points() <= 37);
    }

    /// Card order within a hand does not change either score.
    #[test]
    fn prop_scores_ignore_order(hand in any_hand()) {
        let mut reversed = hand.cards().to_vec();
        reversed.reverse();
        let reversed = Hand::from_cards(reversed);
        prop_assert_eq!(hand.points(), reversed.points());
        prop_assert_eq!(hand.alternate_points().to_bits(), reversed.alternate_points().to_bits());
    }
}

#[test]
fn shuffle_has_no_positional_bias() {
    const TRIALS: usize = 10_000;

    let mut rng = ChaCha8Rng::seed_from_u64(0x00B1_D6E5);
    let canonical = Deck::canonical();
    let mut counts = vec![[0usize; DECK_SIZE]; DECK_SIZE];
    for _ in 0..TRIALS {
        let deck = canonical.clone().shuffle(&mut rng);
        for (position, card) in deck.cards().iter().enumerate() {
            let id = card.suit.index() * 13 + card.rank.index();
            counts[position][id] += 1;
        }
    }

    let expected = TRIALS as f64 / DECK_SIZE as f64;
    let sigma = (expected * (1.0 - 1.0 / DECK_SIZE as f64)).sqrt();
    for (position, row) in counts.iter().enumerate() {
        for (id, &count) in row.iter().enumerate() {
            let deviation = (count as f64 - expected).abs();
            assert!(
                deviation < 6.0 * sigma,
                "card {id} landed at position {position} {count} times, expected about {expected:.0}"
            );
        }
    }
}

#[test]
fn distribute_matches_positions() {
    let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(21));
    let hands = distribute(&deck).unwrap();
    for (position, card) in deck.cards().iter().enumerate() {
        let seat = Seat::ALL[position % 4];
        assert_eq!(hands[&seat].cards()[position / 4], *card);
    }
}
