use std::fmt;

use crate::core::{format_cards, Card, CardBitSet, HandType, MadeHandError, Score};

/// Same value, different suit cards that could replace a played card.
///
/// Entries keep the order of the played cards and each list keeps the order
/// the cards were found in. An `Alternates` is never empty; a hand without
/// any stores `None` instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<(Card, Vec<Card>)>",
        into = "Vec<(Card, Vec<Card>)>"
    )
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alternates {
    entries: Vec<(Card, Vec<Card>)>,
}

impl Alternates {
    /// Build an alternates map, dropping empty lists.
    ///
    /// Returns `None` when nothing is left. Repeated keys are merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{Alternates, Card};
    ///
    /// let qh: Card = "Qh".parse().unwrap();
    /// let qd: Card = "Qd".parse().unwrap();
    /// assert!(Alternates::new(vec![(qh, vec![])]).is_none());
    ///
    /// let alternates = Alternates::new(vec![(qh, vec![qd])]).unwrap();
    /// assert_eq!(Some(&[qd][..]), alternates.get(qh));
    /// ```
    pub fn new<I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Card, Vec<Card>)>,
    {
        let mut merged: Vec<(Card, Vec<Card>)> = Vec::new();
        for (card, alts) in entries {
            if alts.is_empty() {
                continue;
            }
            match merged.iter_mut().find(|(c, _)| *c == card) {
                Some((_, existing)) => existing.extend(alts),
                None => merged.push((card, alts)),
            }
        }
        if merged.is_empty() {
            None
        } else {
            Some(Self { entries: merged })
        }
    }

    /// The alternates recorded for a played card.
    pub fn get(&self, card: Card) -> Option<&[Card]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == card)
            .map(|(_, alts)| alts.as_slice())
    }

    /// Iterate `(played card, alternates)` pairs in played order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, &[Card])> {
        self.entries.iter().map(|(c, alts)| (*c, alts.as_slice()))
    }

    /// Number of played cards that have alternates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, an empty map is stored as `None`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(Card, Vec<Card>)>> for Alternates {
    type Error = MadeHandError;

    /// Strict form of [`Alternates::new`]: an empty list or an empty map is
    /// an error instead of being dropped.
    fn try_from(entries: Vec<(Card, Vec<Card>)>) -> Result<Self, Self::Error> {
        if entries.iter().any(|(_, alts)| alts.is_empty()) {
            return Err(MadeHandError::EmptyAlternates);
        }
        Self::new(entries).ok_or(MadeHandError::EmptyAlternates)
    }
}

impl From<Alternates> for Vec<(Card, Vec<Card>)> {
    fn from(alternates: Alternates) -> Self {
        alternates.entries
    }
}

/// A completed five card poker hand.
///
/// Built by the evaluator from five to seven cards, or directly from its
/// parts when replaying a stored result. The score is always derived from
/// the hand type and the played cards.
///
/// Deserializing goes through [`MadeHand::from_played`], so a stored score
/// is ignored and recomputed.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MadeHand {
    hand_type: HandType,
    played: [Card; 5],
    alternates: Option<Alternates>,
    score: Score,
}

impl MadeHand {
    /// Assemble an evaluator result. The evaluator only plays distinct
    /// input cards and keys alternates on them.
    pub(crate) fn new(
        hand_type: HandType,
        played: [Card; 5],
        alternates: Option<Alternates>,
    ) -> Self {
        Self {
            hand_type,
            score: Score::new(hand_type, &played),
            played,
            alternates,
        }
    }

    /// Rebuild a made hand from its type, its played cards (strongest
    /// first) and any alternates.
    ///
    /// The slice has to hold five different cards, and alternates may only
    /// be keyed on played cards. The score is computed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{parse_cards, HandType, MadeHand, MadeHandError};
    ///
    /// let played = parse_cards("Ah Ad Kh Kd Qh").unwrap();
    /// let hand = MadeHand::from_played(HandType::TwoPair, &played, None).unwrap();
    /// assert_eq!(HandType::TwoPair, hand.score().hand_type());
    ///
    /// let repeated = parse_cards("Ah Ah Kh Kd Qh").unwrap();
    /// assert_eq!(
    ///     Err(MadeHandError::DuplicateCard(played[0])),
    ///     MadeHand::from_played(HandType::TwoPair, &repeated, None)
    /// );
    /// ```
    pub fn from_played(
        hand_type: HandType,
        played: &[Card],
        alternates: Option<Alternates>,
    ) -> Result<Self, MadeHandError> {
        let played: [Card; 5] = played
            .try_into()
            .map_err(|_| MadeHandError::WrongPlayedCount(played.len()))?;

        let mut seen = CardBitSet::new();
        for card in played {
            if !seen.insert(card) {
                return Err(MadeHandError::DuplicateCard(card));
            }
        }
        if let Some(alternates) = &alternates {
            if let Some((card, _)) = alternates.iter().find(|(c, _)| !seen.contains(*c)) {
                return Err(MadeHandError::AlternateNotPlayed(card));
            }
        }

        Ok(Self::new(hand_type, played, alternates))
    }

    /// The hand type.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// The five cards played, strongest first.
    pub fn played(&self) -> &[Card; 5] {
        &self.played
    }

    /// Alternates for the played cards, if any exist.
    pub fn alternates(&self) -> Option<&Alternates> {
        self.alternates.as_ref()
    }

    /// Alternates for a single played card.
    pub fn alternates_for(&self, card: Card) -> Option<&[Card]> {
        self.alternates.as_ref().and_then(|a| a.get(card))
    }

    /// The comparable score.
    pub fn score(&self) -> Score {
        self.score
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MadeHand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Parts {
            hand_type: HandType,
            played: Vec<Card>,
            alternates: Option<Alternates>,
        }

        let parts = Parts::deserialize(deserializer)?;
        Self::from_played(parts.hand_type, &parts.played, parts.alternates)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MadeHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hand_type, format_cards(&self.played))
    }
}
