use thiserror::Error;

use crate::core::Card;
use crate::holdem::TableStatus;

/// Everything that can go wrong handing cards, bytes or text to this crate.
///
/// Every variant is a caller mistake. Logic faults inside the evaluator are
/// not represented here; they panic.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum MadeHandError {
    /// A raw value number that isn't a card value.
    #[error("Card value {0} is outside 2..=14")]
    InvalidValue(u8),

    /// A raw suit number that isn't a suit.
    #[error("Card suit {0} is outside 1..=4")]
    InvalidSuit(u8),

    /// A byte that doesn't decode to a card.
    #[error("Byte 0x{0:02x} doesn't encode a card")]
    InvalidCardByte(u8),

    /// Too few or too many cards to evaluate.
    #[error("Only 5-7 cards can make a hand, got {0}")]
    WrongCardCount(usize),

    /// The same card was given twice.
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),

    /// A fixed size buffer of the wrong size.
    #[error("Value must be exactly {expected} bytes, got {actual}")]
    WrongBufferLength {
        /// Bytes the layout needs.
        expected: usize,
        /// Bytes that were handed in.
        actual: usize,
    },

    /// A byte outside the hand type range.
    #[error("Byte {0} isn't a hand type")]
    InvalidHandType(u8),

    /// A raw score whose fields aren't a hand type and five card values.
    #[error("Raw score {0:#x} isn't a valid score")]
    InvalidScore(u64),

    /// A made hand built from anything but five cards.
    #[error("A made hand plays exactly 5 cards, got {0}")]
    WrongPlayedCount(usize),

    /// An alternates map, or one of its lists, with nothing in it.
    #[error("Alternates can't be empty")]
    EmptyAlternates,

    /// Alternates recorded for a card the hand doesn't play.
    #[error("Card {0} has alternates but isn't played")]
    AlternateNotPlayed(Card),

    /// Text that isn't a card or a list of cards.
    #[error("Unable to parse card from {0:?}")]
    UnparseableCard(String),

    /// Dealing with nothing left.
    #[error("Can't deal from an empty deck")]
    DeckEmpty,

    /// Too few cards left to finish dealing the board.
    #[error("Need {needed} cards to finish the board, only {left} left")]
    NotEnoughCards {
        /// Cards the rest of the board takes, burns included.
        needed: usize,
        /// Cards still in the deck.
        left: usize,
    },

    /// The same card handed to a player and the board, or two players.
    #[error("Card {0} is dealt to more than one place")]
    CardsOverlap(Card),

    /// A street dealt out of order.
    #[error("Expected the table at {expected}, it is at {actual}")]
    WrongStreet {
        /// Status the operation needs.
        expected: TableStatus,
        /// Status the table is in.
        actual: TableStatus,
    },

    /// Community cards that don't fit the table status.
    #[error("Community cards don't match table status {0}")]
    CommunityMismatch(TableStatus),
}
