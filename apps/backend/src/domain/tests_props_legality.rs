//! Property tests for the three-stage legal-card rule and trick resolution.

use proptest::prelude::*;

use crate::domain::cards_logic::{second_card_wins, winner_position_in_trick, winning_card};
use crate::domain::hand::{count_card, hand_has_suit, remove_cards_from_hand};
use crate::domain::tricks::legal_cards;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every legal card is held, and the set is never empty for a non-empty hand.
    #[test]
    fn prop_legal_cards_come_from_hand(
        (trick, hand) in test_gens::trick_and_hand(),
        trump in test_gens::suit(),
    ) {
        let legal = legal_cards(&hand, &trick, trump);
        prop_assert!(!legal.is_empty());
        for card in &legal {
            prop_assert!(hand.contains(card), "{card} is not in hand");
        }
    }

    /// Holding the led suit means every legal card is of that suit.
    #[test]
    fn prop_must_follow_suit(
        (trick, hand) in test_gens::trick_and_hand(),
        trump in test_gens::suit(),
    ) {
        let led = trick[0].suit;
        prop_assume!(hand_has_suit(&hand, led));
        for card in legal_cards(&hand, &trick, trump) {
            prop_assert_eq!(card.suit, led);
        }
    }

    /// Void in the led suit but holding trump means every legal card is trump.
    #[test]
    fn prop_must_trump_when_void(
        (lead, trick_rest, hand) in test_gens::suit().prop_flat_map(|led| {
            (
                test_gens::rank().prop_map(move |r| crate::domain::Card::new(r, led)),
                test_gens::deck_cards(2),
                test_gens::hand_without_suit(led),
            )
        }),
        trump in test_gens::suit(),
    ) {
        prop_assume!(trump != lead.suit && hand_has_suit(&hand, trump));
        let mut trick = vec![lead];
        trick.extend(trick_rest);
        for card in legal_cards(&hand, &trick, trump) {
            prop_assert_eq!(card.suit, trump);
        }
    }

    /// When some candidate beats the running winner, only beating cards are legal.
    #[test]
    fn prop_must_beat_if_possible(
        (trick, hand) in test_gens::trick_and_hand(),
        trump in test_gens::suit(),
    ) {
        let led = trick[0].suit;
        let candidate_suit = if hand_has_suit(&hand, led) {
            led
        } else if hand_has_suit(&hand, trump) {
            trump
        } else {
            return Ok(());
        };
        let winner = winning_card(&trick, trump).unwrap();
        let can_beat = hand
            .iter()
            .any(|&c| c.suit == candidate_suit && second_card_wins(winner, c, trump));
        let legal = legal_cards(&hand, &trick, trump);
        if can_beat {
            for card in legal {
                prop_assert!(second_card_wins(winner, card, trump));
            }
        } else {
            let mut expected: Vec<_> = hand.iter().copied().filter(|c| c.suit == candidate_suit).collect();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(legal, expected);
        }
    }

    /// Removing a held card takes exactly one instance and nothing else.
    #[test]
    fn prop_removal_takes_one_instance(hand in test_gens::hand(), pick in any::<prop::sample::Index>()) {
        let card = hand[pick.index(hand.len())];
        let after = remove_cards_from_hand(&hand, &[card]).unwrap();
        prop_assert_eq!(after.len(), hand.len() - 1);
        prop_assert_eq!(count_card(&after, card), count_card(&hand, card) - 1);
        for other in hand.iter().filter(|&&c| c != card) {
            prop_assert_eq!(count_card(&after, *other), count_card(&hand, *other));
        }
    }

    /// No later card in a trick beats the winning card.
    #[test]
    fn prop_winner_is_unbeaten(trick in test_gens::deck_cards(4), trump in test_gens::suit()) {
        let pos = winner_position_in_trick(&trick, trump).unwrap();
        let winner = trick[pos];
        for later in &trick[pos + 1..] {
            prop_assert!(!second_card_wins(winner, *later, trump));
        }
    }
}
