use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{Card, CardBitSet, MadeHandError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Cards left to deal, in the order they will be dealt.
///
/// A fresh deck holds every card, hearts first and each suit from two up to
/// ace. Shuffling is left to the caller's random number generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
    set: CardBitSet,
}

impl Deck {
    /// An ordered, full deck.
    pub fn new() -> Self {
        let set = CardBitSet::full_deck();
        Self {
            cards: set.iter().collect(),
            set,
        }
    }

    /// A full deck in random order.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::Deck;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the cards that are left.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Take the next card.
    pub fn deal(&mut self) -> Result<Card, MadeHandError> {
        let card = self.cards.pop_front().ok_or(MadeHandError::DeckEmpty)?;
        self.set.remove(card);
        Ok(card)
    }

    /// Take a card out of the deck wherever it is. Returns `true` if it was
    /// still there.
    pub fn remove(&mut self, card: Card) -> bool {
        if !self.set.remove(card) {
            return false;
        }
        self.cards.retain(|c| *c != card);
        true
    }

    /// Is the card still waiting to be dealt.
    pub fn contains(&self, card: Card) -> bool {
        self.set.contains(card)
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card is dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// One byte per remaining card, in dealing order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cards.iter().map(|c| c.to_byte()).collect()
    }

    /// Rebuild a deck from [`Deck::to_bytes`]. Every byte has to be a card
    /// and no card may repeat.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MadeHandError> {
        let mut cards = VecDeque::with_capacity(bytes.len());
        let mut set = CardBitSet::new();
        for byte in bytes {
            let card = Card::from_byte(*byte)?;
            if !set.insert(card) {
                #[cfg(feature = "tracing")]
                debug!(%card, "Duplicate card in encoded deck");
                return Err(MadeHandError::DuplicateCard(card));
            }
            cards.push_back(card);
        }
        Ok(Self { cards, set })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
