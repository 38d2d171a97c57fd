use std::fmt;

use crate::core::{Card, MadeHandError};

/// All the different possible hand types, weakest first.
///
/// The discriminant is the byte written by the binary codec and the top
/// field of a [`Score`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
#[repr(u8)]
pub enum HandType {
    /// The lowest rank.
    /// No matches
    HighCard = 1,
    /// One Card matches another.
    Pair = 2,
    /// Two different pair of matching cards.
    TwoPair = 3,
    /// Three of the same value.
    ThreeOfAKind = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 9,
    /// Ace high straight flush.
    RoyalFlush = 10,
}

const HAND_TYPES: [HandType; 10] = [
    HandType::HighCard,
    HandType::Pair,
    HandType::TwoPair,
    HandType::ThreeOfAKind,
    HandType::Straight,
    HandType::Flush,
    HandType::FullHouse,
    HandType::FourOfAKind,
    HandType::StraightFlush,
    HandType::RoyalFlush,
];

impl HandType {
    /// Every hand type, weakest first.
    pub const fn hand_types() -> [HandType; 10] {
        HAND_TYPES
    }

    /// How many trailing played cards can be swapped for a card of the same
    /// value without changing the hand.
    ///
    /// Only kickers and the spare half of a full house qualify, plus every
    /// card of a plain straight since suits never matter there.
    pub(crate) const fn alternate_depth(self) -> usize {
        match self {
            HandType::TwoPair => 1,
            HandType::FullHouse => 2,
            HandType::FourOfAKind => 1,
            HandType::Straight => 5,
            _ => 0,
        }
    }
}

impl TryFrom<u8> for HandType {
    type Error = MadeHandError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            1..=10 => Ok(HAND_TYPES[byte as usize - 1]),
            _ => Err(MadeHandError::InvalidHandType(byte)),
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandType::HighCard => "HighCard",
            HandType::Pair => "Pair",
            HandType::TwoPair => "TwoPair",
            HandType::ThreeOfAKind => "ThreeOfAKind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "FullHouse",
            HandType::FourOfAKind => "FourOfAKind",
            HandType::StraightFlush => "StraightFlush",
            HandType::RoyalFlush => "RoyalFlush",
        };
        write!(f, "{name}")
    }
}

/// Comparable strength of a made hand.
///
/// ```text
///   bits 40..48  hand type
///   bits 32..40  value of played card 0
///   bits 24..32  value of played card 1
///   bits 16..24  value of played card 2
///   bits  8..16  value of played card 3
///   bits  0..8   value of played card 4
/// ```
///
/// Any hand type beats every lower hand type; inside a type the played
/// values compare most significant first. Suits are never encoded, so equal
/// scores are a real split.
///
/// With the `serde` feature a score travels as its raw `u64` and is checked
/// on the way back in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct Score(u64);

impl Score {
    /// Score a hand type and its five played cards.
    pub fn new(hand_type: HandType, played: &[Card; 5]) -> Self {
        let score = played
            .iter()
            .fold(hand_type as u64, |acc, card| (acc << 8) | card.value.number() as u64);
        Self(score)
    }

    /// The raw 48 bit score.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The hand type stored in the top field.
    pub fn hand_type(self) -> HandType {
        match HandType::try_from((self.0 >> 40) as u8) {
            Ok(hand_type) => hand_type,
            Err(_) => unreachable!("score built without a hand type"),
        }
    }
}

impl TryFrom<u64> for Score {
    type Error = MadeHandError;

    /// Accept a raw score only if its top field is a hand type and every
    /// played field is a card value.
    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        let hand_type = raw >> 40;
        let valid_type = (1..=10).contains(&hand_type);
        let valid_values = (0..5).all(|i| (2..=14).contains(&((raw >> (i * 8)) & 0xFF)));
        if valid_type && valid_values {
            Ok(Self(raw))
        } else {
            Err(MadeHandError::InvalidScore(raw))
        }
    }
}

impl From<Score> for u64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_cards;

    fn played(text: &str) -> [Card; 5] {
        parse_cards(text).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_cmp() {
        assert!(HandType::HighCard < HandType::StraightFlush);
        assert!(HandType::HighCard < HandType::FourOfAKind);
        assert!(HandType::HighCard < HandType::ThreeOfAKind);
        assert!(HandType::StraightFlush < HandType::RoyalFlush);
    }

    #[test]
    fn test_hand_type_ordering() {
        let types = HandType::hand_types();
        for pair in types.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_hand_type_bytes() {
        for t in HandType::hand_types() {
            assert_eq!(Ok(t), HandType::try_from(t as u8));
        }
        assert_eq!(Err(MadeHandError::InvalidHandType(0)), HandType::try_from(0));
        assert_eq!(
            Err(MadeHandError::InvalidHandType(11)),
            HandType::try_from(11)
        );
    }

    #[test]
    fn test_hand_type_display() {
        assert_eq!("ThreeOfAKind", HandType::ThreeOfAKind.to_string());
        assert_eq!("RoyalFlush", HandType::RoyalFlush.to_string());
    }

    #[test]
    fn test_alternate_depth() {
        assert_eq!(1, HandType::TwoPair.alternate_depth());
        assert_eq!(2, HandType::FullHouse.alternate_depth());
        assert_eq!(1, HandType::FourOfAKind.alternate_depth());
        assert_eq!(5, HandType::Straight.alternate_depth());
        assert_eq!(0, HandType::Flush.alternate_depth());
        assert_eq!(0, HandType::RoyalFlush.alternate_depth());
    }

    #[test]
    fn test_score_known_value() {
        let score = Score::new(HandType::HighCard, &played("2h 3d 4c 5s 6h"));
        assert_eq!(1_108_152_157_446, score.value());
        assert_eq!(HandType::HighCard, score.hand_type());
    }

    #[test]
    fn test_score_layout() {
        let score = Score::new(HandType::FullHouse, &played("Ah Ad Ac Kh Kd"));
        assert_eq!(0x07_0E_0E_0E_0D_0D, score.value());
    }

    #[test]
    fn test_score_ignores_suits() {
        let a = Score::new(HandType::Pair, &played("Ah Ad Kh Qh Jh"));
        let b = Score::new(HandType::Pair, &played("As Ac Ks Qs Js"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_type_dominates() {
        let pair = Score::new(HandType::Pair, &played("Ah Ad Kh Qh Jh"));
        let two_pair = Score::new(HandType::TwoPair, &played("3h 3d 2h 2d 4h"));
        assert!(two_pair > pair);
    }

    #[test]
    fn test_raw_score_checked() {
        let score = Score::new(HandType::HighCard, &played("2h 3d 4c 5s 6h"));
        assert_eq!(Ok(score), Score::try_from(score.value()));
        assert_eq!(Err(MadeHandError::InvalidScore(1)), Score::try_from(1));
        // Hand type 11.
        assert!(Score::try_from(0x0B_0E_0E_0E_0D_0D).is_err());
        // A played field of 1.
        assert!(Score::try_from(0x07_0E_0E_0E_0D_01).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_bad_score() {
        let score = Score::new(HandType::FullHouse, &played("Ah Ad Ac Kh Kd"));
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(score.value().to_string(), json);
        assert_eq!(score, serde_json::from_str::<Score>(&json).unwrap());
        assert!(serde_json::from_str::<Score>("1").is_err());
        assert!(serde_json::from_str::<Score>("0").is_err());
    }

    #[test]
    fn test_score_kickers_break_ties() {
        let high = Score::new(HandType::Pair, &played("Ah Ad Kh Qh Jh"));
        let low = Score::new(HandType::Pair, &played("As Ac Ks Qs Ts"));
        assert!(high > low);
    }
}
