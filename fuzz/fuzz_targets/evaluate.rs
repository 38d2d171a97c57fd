#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate made_hand;

use libfuzzer_sys::fuzz_target;
use made_hand::core::{evaluate, sorted_strongest_first, Card, CardBitSet, MadeHandError};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub cards: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let unique: CardBitSet = input.cards.iter().copied().collect();
    match evaluate(&input.cards) {
        Ok(hand) => {
            assert!((5..=7).contains(&input.cards.len()));
            assert_eq!(unique.count(), input.cards.len());
            for card in hand.played() {
                assert!(unique.contains(*card));
            }
            let played: CardBitSet = hand.played().iter().copied().collect();
            assert_eq!(5, played.count());

            // Input order never matters.
            let reordered = sorted_strongest_first(&input.cards);
            assert_eq!(hand, evaluate(&reordered).unwrap());
        }
        Err(MadeHandError::WrongCardCount(n)) => assert!(!(5..=7).contains(&n)),
        Err(MadeHandError::DuplicateCard(card)) => assert!(unique.contains(card)),
        Err(e) => panic!("Unexpected error {e}"),
    }
});
