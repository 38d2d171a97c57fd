/// card.rs has value, suit and card.
mod card;
/// Export `Card`, `Value`, `Suit` and the sort helpers.
pub use self::card::{sort_strongest_first, sorted_strongest_first, Card, Suit, Value};

/// Module for the bit set of cards used for duplicate checks.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::CardBitSet;

/// Errors for everything in core.
mod error;
/// Export `MadeHandError`
pub use self::error::MadeHandError;

/// Text parsing and rendering of cards.
mod parse;
/// Export the list helpers.
pub use self::parse::{format_cards, parse_cards};

/// Module that splits cards into same value groups.
mod grouping;
/// Export `HandGrouping`
pub use self::grouping::{HandGrouping, MAX_CARDS, MIN_CARDS};

/// Hand types and scores.
mod rank;
/// Export `HandType` and `Score`
pub use self::rank::{HandType, Score};

/// The result of evaluating a hand.
mod made_hand;
/// Export `MadeHand` and `Alternates`
pub use self::made_hand::{Alternates, MadeHand};

/// Module with the best five card detection.
mod evaluator;
/// Export `evaluate` and `MakeHand`
pub use self::evaluator::{evaluate, MakeHand};

/// Fixed width binary form of a made hand.
mod codec;
/// Export the encoded length.
pub use self::codec::ENCODED_LEN;

/// Deck of cards to deal from.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Iterate over every k card combination.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;
