use crate::core::{Alternates, Card, CardBitSet, HandType, MadeHand, MadeHandError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Bytes in an encoded [`MadeHand`].
pub const ENCODED_LEN: usize = 1 + 5 * SLOT_LEN;

/// One played card followed by up to three alternates.
const SLOT_LEN: usize = 4;
const MAX_ALTERNATES: usize = SLOT_LEN - 1;

impl MadeHand {
    /// Encode into the fixed 21 byte layout.
    ///
    /// ```text
    ///   byte 0        hand type
    ///   bytes 1..5    played card 0, then its alternates padded with 0
    ///   bytes 5..9    played card 1, ...
    ///   ...
    ///   bytes 17..21  played card 4, ...
    /// ```
    ///
    /// Only the first three alternates of a card fit; any more are dropped.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut bytes = [0u8; ENCODED_LEN];
        bytes[0] = self.hand_type() as u8;

        for (slot, played) in bytes[1..].chunks_exact_mut(SLOT_LEN).zip(self.played()) {
            slot[0] = played.to_byte();
            let alternates = self.alternates_for(*played).unwrap_or_default();
            for (out, alt) in slot[1..].iter_mut().zip(alternates) {
                *out = alt.to_byte();
            }
        }
        bytes
    }

    /// Decode the layout written by [`MadeHand::to_bytes`].
    ///
    /// The score is recomputed from the decoded hand type and played cards.
    /// A played card may only appear once.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{HandType, MadeHand, MadeHandError};
    ///
    /// let mut bytes = [0u8; 21];
    /// bytes[0] = 1;
    /// for (i, card) in [0x21, 0x32, 0x43, 0x54, 0x61].into_iter().enumerate() {
    ///     bytes[1 + i * 4] = card;
    /// }
    /// let hand = MadeHand::from_bytes(&bytes).unwrap();
    /// assert_eq!(HandType::HighCard, hand.hand_type());
    /// assert_eq!(1_108_152_157_446, hand.score().value());
    ///
    /// assert_eq!(
    ///     Err(MadeHandError::WrongBufferLength { expected: 21, actual: 20 }),
    ///     MadeHand::from_bytes(&bytes[..20])
    /// );
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MadeHandError> {
        if bytes.len() != ENCODED_LEN {
            #[cfg(feature = "tracing")]
            debug!(len = bytes.len(), "Wrong length for an encoded hand");
            return Err(MadeHandError::WrongBufferLength {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let hand_type = HandType::try_from(bytes[0])?;
        let mut played = Vec::with_capacity(5);
        let mut entries = Vec::with_capacity(5);
        let mut seen = CardBitSet::new();

        for slot in bytes[1..].chunks_exact(SLOT_LEN) {
            let card = Card::from_byte(slot[0])?;
            if !seen.insert(card) {
                #[cfg(feature = "tracing")]
                debug!(%card, "Card played twice in encoded hand");
                return Err(MadeHandError::DuplicateCard(card));
            }
            let mut alts = Vec::with_capacity(MAX_ALTERNATES);
            for byte in &slot[1..] {
                if let Some(alt) = Card::from_optional_byte(*byte)? {
                    alts.push(alt);
                }
            }
            played.push(card);
            entries.push((card, alts));
        }

        Self::from_played(hand_type, &played, Alternates::new(entries))
    }
}

impl TryFrom<&[u8]> for MadeHand {
    type Error = MadeHandError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::{evaluate, format_cards, parse_cards, Deck};

    fn cards(text: &str) -> Vec<Card> {
        parse_cards(text).unwrap()
    }

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    fn reference_hand() -> MadeHand {
        let alternates = Alternates::new(vec![
            (card("2h"), cards("2d 2s")),
            (card("3d"), cards("3c 3s")),
        ]);
        MadeHand::from_played(HandType::HighCard, &cards("2h 3d 4c 5s 6h"), alternates).unwrap()
    }

    const REFERENCE_BYTES: [u8; ENCODED_LEN] = [
        0x01, //
        0x21, 0x22, 0x24, 0x00, //
        0x32, 0x33, 0x34, 0x00, //
        0x43, 0x00, 0x00, 0x00, //
        0x54, 0x00, 0x00, 0x00, //
        0x61, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn test_encode_reference() {
        assert_eq!(REFERENCE_BYTES, reference_hand().to_bytes());
    }

    #[test]
    fn test_decode_reference() {
        let hand = MadeHand::from_bytes(&REFERENCE_BYTES).unwrap();
        assert_eq!(reference_hand(), hand);
        assert_eq!(1_108_152_157_446, hand.score().value());
        assert_eq!(Some(&cards("2d 2s")[..]), hand.alternates_for(card("2h")));
        assert_eq!(None, hand.alternates_for(card("4c")));
    }

    #[test]
    fn test_no_alternates_decode_to_none() {
        let hand = MadeHand::from_played(HandType::Flush, &cards("Jh 9h 7h 5h 2h"), None).unwrap();
        let bytes = hand.to_bytes();
        assert!(bytes[1..].chunks(4).all(|slot| slot[1..] == [0, 0, 0]));
        assert_eq!(hand, MadeHand::from_bytes(&bytes).unwrap());
    }

    #[test]
    fn test_extra_alternates_are_dropped() {
        let alternates = Alternates::new(vec![(card("2h"), cards("2d 2c 2s 3c"))]);
        let hand =
            MadeHand::from_played(HandType::HighCard, &cards("2h 4d 6c 8s Th"), alternates).unwrap();
        let bytes = hand.to_bytes();
        assert_eq!([0x21, 0x22, 0x23, 0x24], bytes[1..5]);
        let decoded = MadeHand::from_bytes(&bytes).unwrap();
        assert_eq!(Some(&cards("2d 2c 2s")[..]), decoded.alternates_for(card("2h")));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            Err(MadeHandError::WrongBufferLength {
                expected: 21,
                actual: 22
            }),
            MadeHand::from_bytes(&[0u8; 22])
        );
        assert_eq!(
            Err(MadeHandError::WrongBufferLength {
                expected: 21,
                actual: 0
            }),
            MadeHand::from_bytes(&[])
        );
    }

    #[test]
    fn test_bad_hand_type() {
        let mut bytes = REFERENCE_BYTES;
        bytes[0] = 0;
        assert_eq!(
            Err(MadeHandError::InvalidHandType(0)),
            MadeHand::from_bytes(&bytes)
        );
        bytes[0] = 11;
        assert_eq!(
            Err(MadeHandError::InvalidHandType(11)),
            MadeHand::from_bytes(&bytes)
        );
    }

    #[test]
    fn test_bad_card_bytes() {
        let mut bytes = REFERENCE_BYTES;
        bytes[5] = 0x00;
        assert_eq!(
            Err(MadeHandError::InvalidCardByte(0x00)),
            MadeHand::from_bytes(&bytes)
        );

        let mut bytes = REFERENCE_BYTES;
        bytes[4] = 0xF1;
        assert_eq!(
            Err(MadeHandError::InvalidCardByte(0xF1)),
            MadeHand::from_bytes(&bytes)
        );
    }

    #[test]
    fn test_repeated_played_card() {
        let mut bytes = REFERENCE_BYTES;
        bytes[5] = 0x21;
        assert_eq!(
            Err(MadeHandError::DuplicateCard(card("2h"))),
            MadeHand::from_bytes(&bytes)
        );
    }

    #[test]
    fn test_try_from() {
        let hand = MadeHand::try_from(&REFERENCE_BYTES[..]).unwrap();
        assert_eq!("HighCard: 2h 3d 4c 5s 6h", hand.to_string());
    }

    #[test]
    fn test_evaluated_hands_survive_encoding() {
        let mut rng = StdRng::seed_from_u64(21);
        for n in [5, 6, 7] {
            for _ in 0..1_000 {
                let deck = Deck::shuffled(&mut rng);
                let hand: Vec<Card> = deck.into_iter().take(n).collect();
                let made = evaluate(&hand).unwrap();
                let decoded = MadeHand::from_bytes(&made.to_bytes()).unwrap();
                assert_eq!(made, decoded, "{}", format_cards(&hand));
            }
        }
    }
}
