use std::fmt;

use crate::core::{Card, Suit, Value};

/// A set of cards stored as one bit per card.
///
/// There are only 52 cards so a `u64` holds the whole deck. Insert and
/// contains are O(1) with no heap allocation, which matters since duplicate
/// checks run on every evaluation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    bits: u64,
}

/// Mask with every card of the deck set.
const FULL_DECK: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Creates a new empty `CardBitSet`.
    #[inline]
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// A set holding all 52 cards.
    #[inline]
    pub fn full_deck() -> Self {
        Self { bits: FULL_DECK }
    }

    /// Inserts a card into the set.
    ///
    /// Returns `true` if the card was not already present (i.e., it was newly
    /// inserted), or `false` if it was already in the set.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let mask = 1u64 << card.index();
        let was_present = (self.bits & mask) != 0;
        self.bits |= mask;
        !was_present
    }

    /// Removes a card, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, card: Card) -> bool {
        let mask = 1u64 << card.index();
        let was_present = (self.bits & mask) != 0;
        self.bits &= !mask;
        was_present
    }

    /// Returns `true` if the set contains the given card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        (self.bits & (1u64 << card.index())) != 0
    }

    /// Returns the number of cards in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate the cards in the set, suit major, lowest value first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::suits().into_iter().flat_map(move |suit| {
            Value::values()
                .into_iter()
                .map(move |value| Card::new(value, suit))
                .filter(move |card| self.contains(*card))
        })
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = CardBitSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = CardBitSet::new();
        let ah = Card::new(Value::Ace, Suit::Heart);
        let two_s = Card::new(Value::Two, Suit::Spade);

        // Insert returns true for new insertions
        assert!(set.insert(ah));
        assert!(set.insert(two_s));

        // Insert returns false for duplicates
        assert!(!set.insert(ah));

        assert!(set.contains(ah));
        assert!(set.contains(two_s));
        assert!(!set.contains(Card::new(Value::Ace, Suit::Spade)));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = CardBitSet::full_deck();
        let kd = Card::new(Value::King, Suit::Diamond);
        assert_eq!(52, set.count());
        assert!(set.remove(kd));
        assert!(!set.remove(kd));
        assert!(!set.contains(kd));
        assert_eq!(51, set.count());
    }

    #[test]
    fn test_iter_matches_contents() {
        let cards = vec![
            Card::new(Value::Nine, Suit::Club),
            Card::new(Value::Two, Suit::Heart),
            Card::new(Value::Ace, Suit::Spade),
        ];
        let set: CardBitSet = cards.iter().copied().collect();
        let back: Vec<Card> = set.into_iter().collect();
        assert_eq!(
            vec![
                Card::new(Value::Two, Suit::Heart),
                Card::new(Value::Nine, Suit::Club),
                Card::new(Value::Ace, Suit::Spade),
            ],
            back
        );
    }

    #[test]
    fn test_full_deck_iterates_every_card() {
        assert_eq!(52, CardBitSet::full_deck().iter().count());
    }
}
