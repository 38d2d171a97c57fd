use std::fmt;
use std::str::FromStr;

use crate::core::{format_cards, parse_cards, Card, CardBitSet, Deck, MadeHandError};
use crate::holdem::Pocket;

/// The five community cards: flop, turn and river.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    flop: [Card; 3],
    turn: Card,
    river: Card,
}

impl Board {
    /// Create a board from five different cards.
    pub fn new(flop: [Card; 3], turn: Card, river: Card) -> Result<Self, MadeHandError> {
        let mut seen = CardBitSet::new();
        for card in flop.iter().chain([&turn, &river]) {
            if !seen.insert(*card) {
                return Err(MadeHandError::DuplicateCard(*card));
            }
        }
        Ok(Self { flop, turn, river })
    }

    /// Deal the flop, then the turn, then the river.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, MadeHandError> {
        let flop = [deck.deal()?, deck.deal()?, deck.deal()?];
        let turn = deck.deal()?;
        let river = deck.deal()?;
        Self::new(flop, turn, river)
    }

    /// The first three cards.
    pub fn flop(&self) -> &[Card; 3] {
        &self.flop
    }

    /// The fourth card.
    pub fn turn(&self) -> Card {
        self.turn
    }

    /// The fifth card.
    pub fn river(&self) -> Card {
        self.river
    }

    /// All five cards in dealing order.
    pub fn cards(&self) -> [Card; 5] {
        let [a, b, c] = self.flop;
        [a, b, c, self.turn, self.river]
    }

    /// Is the card on the board.
    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// The seven cards a player makes a hand from.
    pub fn with_pocket(&self, pocket: &Pocket) -> [Card; 7] {
        let [a, b, c, d, e] = self.cards();
        let [f, g] = *pocket.cards();
        [a, b, c, d, e, f, g]
    }

    /// The five cards as card bytes, in dealing order.
    pub fn to_bytes(&self) -> [u8; 5] {
        self.cards().map(Card::to_byte)
    }

    /// Read the five bytes written by [`Board::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MadeHandError> {
        match bytes {
            [a, b, c, turn, river] => Self::new(
                [Card::from_byte(*a)?, Card::from_byte(*b)?, Card::from_byte(*c)?],
                Card::from_byte(*turn)?,
                Card::from_byte(*river)?,
            ),
            _ => Err(MadeHandError::WrongBufferLength {
                expected: 5,
                actual: bytes.len(),
            }),
        }
    }
}

impl FromStr for Board {
    type Err = MadeHandError;

    /// Parse five short card codes such as `"Ah Kd 7c 4h 2s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [a, b, c, turn, river] => Self::new([*a, *b, *c], *turn, *river),
            _ => Err(MadeHandError::UnparseableCard(s.to_string())),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cards(&self.cards()))
    }
}
