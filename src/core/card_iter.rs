use crate::core::Card;

/// Every way to pick `num_cards` cards out of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions in the
/// slice, and each one keeps the slice order.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Positions making up the next combination, `None` once exhausted.
    idx: Option<Vec<usize>>,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{CardIter, parse_cards};
    ///
    /// let cards = parse_cards("Ah Kh Qh Jh").unwrap();
    /// assert_eq!(6, CardIter::new(&cards, 2).count());
    /// ```
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        let idx = (num_cards <= possible_cards.len()).then(|| (0..num_cards).collect());
        CardIter {
            possible_cards,
            idx,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let idx = self.idx.as_mut()?;
        let result = idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most position that can still move forward, then
        // reset everything after it to follow on directly.
        let len = self.possible_cards.len();
        let k = idx.len();
        match (0..k).rev().find(|&level| idx[level] < len - k + level) {
            Some(level) => {
                idx[level] += 1;
                let mut follow = idx[level];
                for slot in &mut idx[level + 1..] {
                    follow += 1;
                    *slot = follow;
                }
            }
            None => self.idx = None,
        }

        Some(result)
    }
}
