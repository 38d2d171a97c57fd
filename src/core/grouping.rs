use crate::core::{Card, CardBitSet, MadeHandError};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Smallest card count a hand can be made from.
pub const MIN_CARDS: usize = 5;
/// Largest card count a hand can be made from.
pub const MAX_CARDS: usize = 7;

/// Cards of a hand split up by how many share each value.
///
/// Every input card lands in exactly one group and no two groups share a
/// value. Inside each bucket groups keep the order their value was first
/// seen in the input, so feeding cards sorted strongest first (the only way
/// the evaluator does it) puts the strongest group of each size first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandGrouping {
    four_of_a_kind: Vec<Vec<Card>>,
    three_of_a_kind: Vec<Vec<Card>>,
    pairs: Vec<Vec<Card>>,
    singles: Vec<Vec<Card>>,
}

impl HandGrouping {
    /// Group 5 to 7 distinct cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{HandGrouping, parse_cards};
    ///
    /// let groups = HandGrouping::new(&parse_cards("Ah Ad Kh Ks Kd 7c 2c").unwrap()).unwrap();
    /// assert_eq!(1, groups.three_of_a_kind().len());
    /// assert_eq!(1, groups.pairs().len());
    /// assert_eq!(2, groups.singles().len());
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, MadeHandError> {
        if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
            #[cfg(feature = "tracing")]
            debug!(count = cards.len(), "Refusing to group cards");
            return Err(MadeHandError::WrongCardCount(cards.len()));
        }

        // One slot per value, plus the order values were first seen in.
        let mut by_value: [Vec<Card>; 13] = Default::default();
        let mut seen_order = Vec::with_capacity(cards.len());
        let mut seen_cards = CardBitSet::new();

        for card in cards {
            if !seen_cards.insert(*card) {
                #[cfg(feature = "tracing")]
                debug!(%card, "Duplicate card in grouping");
                return Err(MadeHandError::DuplicateCard(*card));
            }
            let slot = &mut by_value[card.value.slot()];
            if slot.is_empty() {
                seen_order.push(card.value);
            }
            slot.push(*card);
        }

        let mut groups = Self {
            four_of_a_kind: Vec::new(),
            three_of_a_kind: Vec::new(),
            pairs: Vec::new(),
            singles: Vec::new(),
        };

        for value in seen_order {
            let group = std::mem::take(&mut by_value[value.slot()]);
            match group.len() {
                4 => groups.four_of_a_kind.push(group),
                3 => groups.three_of_a_kind.push(group),
                2 => groups.pairs.push(group),
                1 => groups.singles.push(group),
                n => unreachable!("Impossible grouping of {n} cards"),
            }
        }

        #[cfg(feature = "tracing")]
        trace!(
            quads = groups.four_of_a_kind.len(),
            trips = groups.three_of_a_kind.len(),
            pairs = groups.pairs.len(),
            singles = groups.singles.len(),
            "Grouped cards"
        );

        Ok(groups)
    }

    /// Groups of four cards of the same value.
    pub fn four_of_a_kind(&self) -> &[Vec<Card>] {
        &self.four_of_a_kind
    }

    /// Groups of three cards of the same value.
    pub fn three_of_a_kind(&self) -> &[Vec<Card>] {
        &self.three_of_a_kind
    }

    /// Groups of two cards of the same value.
    pub fn pairs(&self) -> &[Vec<Card>] {
        &self.pairs
    }

    /// Cards with no other card of the same value, each as a one card group.
    pub fn singles(&self) -> &[Vec<Card>] {
        &self.singles
    }

    /// Every grouped card, biggest groups first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.four_of_a_kind
            .iter()
            .chain(&self.three_of_a_kind)
            .chain(&self.pairs)
            .chain(&self.singles)
            .flatten()
            .copied()
    }
}
