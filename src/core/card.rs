use std::cmp::Reverse;
use std::fmt;

use crate::core::MadeHandError;

/// Card value, the rank of a single card.
///
/// The discriminant of each variant is the number printed on the card, with
/// the faces continuing the count (Jack = 11 .. Ace = 14).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Every value from lowest to highest.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// All thirteen values, lowest first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The rank number, 2 through 14.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero based slot for fixed size per-value tables.
    pub(crate) const fn slot(self) -> usize {
        self as usize - 2
    }

    /// The single character used in short card codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::Value;
    ///
    /// assert_eq!('T', Value::Ten.to_char());
    /// assert_eq!('7', Value::Seven.to_char());
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// The english name of the value.
    pub fn name(self) -> &'static str {
        match self {
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Ten => "Ten",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = MadeHandError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            2..=14 => Ok(VALUES[number as usize - 2]),
            _ => Err(MadeHandError::InvalidValue(number)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
///
/// Suits only tell cards apart and make flushes. The ordering of the
/// variants is used as a tie break when sorting, never as hand strength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
    /// Spades
    Spade = 4,
}

/// Suits in the order flushes are searched.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// All four suits, hearts first.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// The suit number, 1 through 4.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Lower case suit letter used in short card codes.
    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Spade => 's',
        }
    }

    /// The singular english name of the suit.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Spade => "Spade",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = MadeHandError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1..=4 => Ok(SUITS[number as usize - 1]),
            _ => Err(MadeHandError::InvalidSuit(number)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
///
/// Cards order by value first and suit second. Most of this crate wants the
/// opposite, strongest first; see [`sort_strongest_first`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Create a card from raw value (2..=14) and suit (1..=4) numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{Card, MadeHandError, Suit, Value};
    ///
    /// let card = Card::from_parts(14, 1).unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Heart), card);
    /// assert_eq!(Err(MadeHandError::InvalidSuit(5)), Card::from_parts(14, 5));
    /// ```
    pub fn from_parts(value: u8, suit: u8) -> Result<Self, MadeHandError> {
        Ok(Self {
            value: Value::try_from(value)?,
            suit: Suit::try_from(suit)?,
        })
    }

    /// Decode a card from its one byte form, `suit | (value << 4)`.
    ///
    /// Zero is not a card here; use [`Card::from_optional_byte`] for slots
    /// where a card may be missing.
    pub fn from_byte(byte: u8) -> Result<Self, MadeHandError> {
        Self::parse_byte(byte).ok_or(MadeHandError::InvalidCardByte(byte))
    }

    /// Decode a card slot that may be empty. Zero decodes to `None`, any
    /// other byte must be a valid card.
    pub fn from_optional_byte(byte: u8) -> Result<Option<Self>, MadeHandError> {
        match byte {
            0 => Ok(None),
            _ => Self::from_byte(byte).map(Some),
        }
    }

    /// Try to read a card out of a byte, giving `None` when it isn't one.
    pub fn parse_byte(byte: u8) -> Option<Self> {
        let value = Value::try_from((byte >> 4) & 0xF).ok()?;
        let suit = Suit::try_from(byte & 0xF).ok()?;
        Some(Self { value, suit })
    }

    /// The one byte form of this card. Never zero.
    pub const fn to_byte(self) -> u8 {
        self.suit.number() | (self.value.number() << 4)
    }

    /// The one byte form of a card slot, zero when empty.
    pub fn optional_to_byte(card: Option<Card>) -> u8 {
        card.map_or(0, Card::to_byte)
    }

    /// Position of this card inside a 52 card set, suit major.
    pub(crate) const fn index(self) -> usize {
        (self.suit.number() as usize - 1) * 13 + self.value.slot()
    }

    /// Long english form, e.g. `Ace of Hearts`.
    pub fn long_name(self) -> String {
        format!("{} of {}s", self.value.name(), self.suit.name())
    }
}

impl TryFrom<u8> for Card {
    type Error = MadeHandError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.to_byte()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Sort cards by value descending, ties broken in [`Suit::suits`] order.
///
/// Grouping and evaluation rely on this order: the strongest rank comes
/// first and hearts lead inside a rank.
pub fn sort_strongest_first(cards: &mut [Card]) {
    cards.sort_unstable_by_key(|c| (Reverse(c.value), c.suit));
}

/// Copy of `cards` sorted strongest first.
pub fn sorted_strongest_first(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sort_strongest_first(&mut sorted);
    sorted
}
