use std::cmp::Ordering;

use crate::core::{evaluate, CardBitSet, MadeHand, MadeHandError, Score};
use crate::holdem::{Board, Pocket};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Every player's best hand against one board, and who holds the best.
///
/// Exact score ties leave more than one winner. Splitting the pot between
/// them is up to the caller.
#[derive(Debug, Clone)]
pub struct Showdown {
    /// The shared community cards.
    board: Board,
    /// Hole cards, one pocket per player.
    pockets: Vec<Pocket>,
    /// Made hand of each player, same index as the pockets.
    hands: Vec<MadeHand>,
    /// Indices of the players holding the best score.
    winners: Vec<usize>,
}

impl Showdown {
    /// Evaluate every pocket against the board.
    ///
    /// Fails with [`MadeHandError::CardsOverlap`] when a card shows up in
    /// two places.
    ///
    /// # Example
    /// ```
    /// use made_hand::holdem::{Board, Pocket, Showdown};
    ///
    /// let board: Board = "As Kd 7c 4h 2s".parse().unwrap();
    /// let player1: Pocket = "Ah Qd".parse().unwrap(); // Pair of aces
    /// let player2: Pocket = "Kh Kc".parse().unwrap(); // Set of kings
    ///
    /// let showdown = Showdown::new(board, vec![player1, player2]).unwrap();
    /// assert_eq!(&[1], showdown.winners());
    /// assert!(showdown.is_winner(1));
    /// ```
    pub fn new(board: Board, pockets: Vec<Pocket>) -> Result<Self, MadeHandError> {
        let mut used: CardBitSet = board.cards().into_iter().collect();
        for pocket in &pockets {
            for card in pocket.cards() {
                if !used.insert(*card) {
                    #[cfg(feature = "tracing")]
                    debug!(%card, %board, "Card dealt twice in showdown");
                    return Err(MadeHandError::CardsOverlap(*card));
                }
            }
        }

        let hands = pockets
            .iter()
            .map(|pocket| evaluate(&board.with_pocket(pocket)))
            .collect::<Result<Vec<_>, _>>()?;

        // Fold to find the best score and every player holding it.
        let (_, winners) = hands.iter().enumerate().fold(
            (None, Vec::new()),
            |(best, mut winners): (Option<Score>, Vec<usize>), (idx, hand)| {
                match best.map(|b| hand.score().cmp(&b)) {
                    None | Some(Ordering::Greater) => (Some(hand.score()), vec![idx]),
                    Some(Ordering::Equal) => {
                        winners.push(idx);
                        (best, winners)
                    }
                    Some(Ordering::Less) => (best, winners),
                }
            },
        );

        #[cfg(feature = "tracing")]
        trace!(%board, players = pockets.len(), ?winners, "Showdown resolved");

        Ok(Self {
            board,
            pockets,
            hands,
            winners,
        })
    }

    /// Get the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the player pockets
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Made hand of every player, in player order.
    pub fn hands(&self) -> &[MadeHand] {
        &self.hands
    }

    /// Made hand of one player.
    pub fn hand(&self, idx: usize) -> Option<&MadeHand> {
        self.hands.get(idx)
    }

    /// The winning score, `None` with no players.
    pub fn best_score(&self) -> Option<Score> {
        self.winners.first().map(|idx| self.hands[*idx].score())
    }

    /// Players holding the winning score, lowest index first.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// Check a claimed winner.
    pub fn is_winner(&self, idx: usize) -> bool {
        self.winners.contains(&idx)
    }

    /// More than one player holds the winning score.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::{format_cards, Card, Deck, HandType};

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn pocket(text: &str) -> Pocket {
        text.parse().unwrap()
    }

    #[test]
    fn test_better_hand_wins() {
        let showdown = Showdown::new(
            board("2c 7d 9h Js Qs"),
            vec![pocket("Ah Ad"), pocket("Kh Kd")],
        )
        .unwrap();
        assert_eq!(&[0], showdown.winners());
        assert!(showdown.is_winner(0));
        assert!(!showdown.is_winner(1));
        assert!(!showdown.is_tie());
        assert_eq!(HandType::Pair, showdown.hand(0).unwrap().hand_type());
        assert_eq!(showdown.hand(0).map(|h| h.score()), showdown.best_score());
    }

    #[test_log::test]
    fn test_kicker_decides() {
        let showdown = Showdown::new(
            board("As Kd 7c 4h 2s"),
            vec![pocket("Ac Jd"), pocket("Ah Qd")],
        )
        .unwrap();
        assert_eq!(&[1], showdown.winners());
        assert_eq!(
            "Ah As Kd Qd 7c",
            format_cards(showdown.hand(1).unwrap().played())
        );
    }

    #[test]
    fn test_board_plays_for_everyone() {
        let showdown = Showdown::new(
            board("Ah Kh Qh Jh Th"),
            vec![pocket("2c 3d"), pocket("9s 9c"), pocket("As Ks")],
        )
        .unwrap();
        assert_eq!(&[0, 1, 2], showdown.winners());
        assert!(showdown.is_tie());
        assert!(showdown
            .hands()
            .iter()
            .all(|h| h.hand_type() == HandType::RoyalFlush));
    }

    #[test]
    fn test_split_on_equal_scores() {
        // Both make the same ace high straight with different suits.
        let showdown = Showdown::new(
            board("Kd Qc Jh 4s 2c"),
            vec![pocket("Ah Th"), pocket("Ad Ts"), pocket("Kc Ks")],
        )
        .unwrap();
        assert_eq!(&[0, 1], showdown.winners());
        assert_eq!(HandType::Straight, showdown.hand(0).unwrap().hand_type());
    }

    #[test]
    fn test_pocket_overlaps_board() {
        let card: Card = "9h".parse().unwrap();
        assert_eq!(
            Err(MadeHandError::CardsOverlap(card)),
            Showdown::new(board("2c 7d 9h Js Qs"), vec![pocket("Ah 9h")]).map(|_| ())
        );
    }

    #[test]
    fn test_pockets_overlap() {
        let card: Card = "Ad".parse().unwrap();
        assert_eq!(
            Err(MadeHandError::CardsOverlap(card)),
            Showdown::new(
                board("2c 7d 9h Js Qs"),
                vec![pocket("Ah Ad"), pocket("Ad Kd")]
            )
            .map(|_| ())
        );
    }

    #[test]
    fn test_no_players() {
        let showdown = Showdown::new(board("2c 7d 9h Js Qs"), vec![]).unwrap();
        assert!(showdown.winners().is_empty());
        assert_eq!(None, showdown.best_score());
        assert!(!showdown.is_winner(0));
    }

    #[test]
    fn test_dealt_games() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..200 {
            let mut deck = Deck::shuffled(&mut rng);
            let pockets: Vec<Pocket> = (0..6)
                .map(|_| Pocket::deal_from(&mut deck).unwrap())
                .collect();
            let board = Board::deal_from(&mut deck).unwrap();
            let showdown = Showdown::new(board, pockets).unwrap();

            let best = showdown.best_score().unwrap();
            assert!(!showdown.winners().is_empty());
            for (idx, hand) in showdown.hands().iter().enumerate() {
                assert!(hand.score() <= best);
                assert_eq!(hand.score() == best, showdown.is_winner(idx));
            }
        }
    }
}
