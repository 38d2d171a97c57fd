use std::fmt;
use std::str::FromStr;

use crate::core::{format_cards, parse_cards, Card, Deck, MadeHandError};
use crate::holdem::Board;

/// The two hole cards a single player holds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pocket {
    cards: [Card; 2],
}

impl Pocket {
    /// Create a pocket from two different cards.
    pub fn new(first: Card, second: Card) -> Result<Self, MadeHandError> {
        if first == second {
            return Err(MadeHandError::DuplicateCard(first));
        }
        Ok(Self {
            cards: [first, second],
        })
    }

    /// Deal the next two cards of the deck.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, MadeHandError> {
        let first = deck.deal()?;
        let second = deck.deal()?;
        Self::new(first, second)
    }

    /// The hole cards in the order they were given.
    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    /// Does the pocket hold this card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// True when the two pockets share any card.
    pub fn overlaps_pocket(&self, other: &Pocket) -> bool {
        self.cards.iter().any(|c| other.contains(*c))
    }

    /// True when any hole card is also on the board.
    pub fn overlaps_board(&self, board: &Board) -> bool {
        self.cards.iter().any(|c| board.contains(*c))
    }

    /// Both cards as card bytes.
    pub fn to_bytes(&self) -> [u8; 2] {
        [self.cards[0].to_byte(), self.cards[1].to_byte()]
    }

    /// Read the two bytes written by [`Pocket::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MadeHandError> {
        match bytes {
            [first, second] => Self::new(Card::from_byte(*first)?, Card::from_byte(*second)?),
            _ => Err(MadeHandError::WrongBufferLength {
                expected: 2,
                actual: bytes.len(),
            }),
        }
    }
}

impl FromStr for Pocket {
    type Err = MadeHandError;

    /// Parse two short card codes such as `"Ah Kd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [first, second] => Self::new(*first, *second),
            _ => Err(MadeHandError::UnparseableCard(s.to_string())),
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cards(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    #[test]
    fn test_duplicate_hole_cards() {
        assert_eq!(
            Err(MadeHandError::DuplicateCard(card("Ah"))),
            Pocket::new(card("Ah"), card("Ah"))
        );
    }

    #[test]
    fn test_parse_and_display() {
        let pocket: Pocket = "Ah Kd".parse().unwrap();
        assert_eq!(&[card("Ah"), card("Kd")], pocket.cards());
        assert_eq!("Ah Kd", pocket.to_string());
        assert!("Ah".parse::<Pocket>().is_err());
        assert!("Ah Kd Qc".parse::<Pocket>().is_err());
        assert_eq!(
            Err(MadeHandError::UnparseableCard("Zz".to_string())),
            "Ah Zz".parse::<Pocket>()
        );
    }

    #[test]
    fn test_deal_from() {
        let mut deck = Deck::new();
        let pocket = Pocket::deal_from(&mut deck).unwrap();
        assert_eq!("2h 3h", pocket.to_string());
        assert_eq!(50, deck.len());
        assert!(!deck.contains(card("2h")));
    }

    #[test]
    fn test_deal_from_short_deck() {
        let mut deck = Deck::from_bytes(&[0x21]).unwrap();
        assert_eq!(Err(MadeHandError::DeckEmpty), Pocket::deal_from(&mut deck));
    }

    #[test]
    fn test_bytes() {
        let pocket: Pocket = "Ah Kd".parse().unwrap();
        assert_eq!([0xE1, 0xD2], pocket.to_bytes());
        assert_eq!(Ok(pocket), Pocket::from_bytes(&pocket.to_bytes()));
        assert_eq!(
            Err(MadeHandError::WrongBufferLength {
                expected: 2,
                actual: 3
            }),
            Pocket::from_bytes(&[0xE1, 0xD2, 0x21])
        );
        assert_eq!(
            Err(MadeHandError::InvalidCardByte(0)),
            Pocket::from_bytes(&[0xE1, 0x00])
        );
    }

    #[test]
    fn test_overlaps() {
        let a: Pocket = "Ah Kd".parse().unwrap();
        let b: Pocket = "Kd 2c".parse().unwrap();
        let c: Pocket = "Qs Qc".parse().unwrap();
        assert!(a.overlaps_pocket(&b));
        assert!(!a.overlaps_pocket(&c));

        let board: Board = "Qs 7h 5d 4c 3s".parse().unwrap();
        assert!(c.overlaps_board(&board));
        assert!(!a.overlaps_board(&board));
    }
}
