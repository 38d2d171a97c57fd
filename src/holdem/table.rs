use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::core::{format_cards, Card, CardBitSet, Deck, MadeHandError};
use crate::holdem::Board;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// How far the community cards have been dealt.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableStatus {
    /// Nothing on the board yet.
    BeforeFlop,
    /// Flop dealt.
    BeforeTurn,
    /// Flop and turn dealt.
    BeforeRiver,
    /// All five cards are out.
    Complete,
}

impl TableStatus {
    /// Community cards on the table at this status.
    pub const fn dealt(self) -> usize {
        match self {
            TableStatus::BeforeFlop => 0,
            TableStatus::BeforeTurn => 3,
            TableStatus::BeforeRiver => 4,
            TableStatus::Complete => 5,
        }
    }

    /// Cards still taken from the deck to finish the board, one burn per
    /// street included.
    const fn cards_to_finish(self) -> usize {
        match self {
            TableStatus::BeforeFlop => 8,
            TableStatus::BeforeTurn => 4,
            TableStatus::BeforeRiver => 2,
            TableStatus::Complete => 0,
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableStatus::BeforeFlop => "BeforeFlop",
            TableStatus::BeforeTurn => "BeforeTurn",
            TableStatus::BeforeRiver => "BeforeRiver",
            TableStatus::Complete => "Complete",
        };
        write!(f, "{name}")
    }
}

/// A hold'em board dealt street by street from its own deck.
///
/// Each street burns a card first. The deck is owned by the table, so
/// nothing else can draw from it between streets.
///
/// # Examples
///
/// ```
/// use made_hand::core::Deck;
/// use made_hand::holdem::{Table, TableStatus};
///
/// let mut table = Table::new(Deck::new());
/// table.deal_the_flop().unwrap();
/// assert_eq!(TableStatus::BeforeTurn, table.status());
/// assert_eq!("3h 4h 5h", table.to_string());
///
/// table.deal_the_turn().unwrap();
/// table.deal_the_river().unwrap();
/// let board = table.to_final().unwrap();
/// assert_eq!("3h 4h 5h 7h 9h", board.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    deck: Deck,
    status: TableStatus,
    community: [Option<Card>; 5],
}

impl Table {
    /// An empty table that will deal from `deck` in its current order.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            status: TableStatus::BeforeFlop,
            community: [None; 5],
        }
    }

    /// An empty table over a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Deck::shuffled(rng))
    }

    /// Restore a table from its deck, status and the five community bytes
    /// written by [`Table::community_bytes`].
    ///
    /// Undealt slots are 0. The dealt slots have to match the status, no
    /// card may repeat, and no community card may still be in the deck.
    pub fn from_parts(
        deck: Deck,
        status: TableStatus,
        community: &[u8],
    ) -> Result<Self, MadeHandError> {
        if community.len() != 5 {
            return Err(MadeHandError::WrongBufferLength {
                expected: 5,
                actual: community.len(),
            });
        }

        let mut cards = [None; 5];
        let mut seen = CardBitSet::new();
        for (slot, byte) in cards.iter_mut().zip(community) {
            *slot = Card::from_optional_byte(*byte)?;
            if let Some(card) = *slot {
                if !seen.insert(card) {
                    return Err(MadeHandError::DuplicateCard(card));
                }
                if deck.contains(card) {
                    return Err(MadeHandError::CardsOverlap(card));
                }
            }
        }

        let (dealt, undealt) = cards.split_at(status.dealt());
        if dealt.iter().any(Option::is_none) || undealt.iter().any(Option::is_some) {
            #[cfg(feature = "tracing")]
            debug!(%status, ?community, "Community cards don't match the status");
            return Err(MadeHandError::CommunityMismatch(status));
        }

        Ok(Self {
            deck,
            status,
            community: cards,
        })
    }

    /// How far the board has been dealt.
    pub fn status(&self) -> TableStatus {
        self.status
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The community cards dealt so far, in dealing order.
    pub fn cards(&self) -> Vec<Card> {
        self.community.iter().flatten().copied().collect()
    }

    /// Burn a card and deal the three flop cards.
    pub fn deal_the_flop(&mut self) -> Result<(), MadeHandError> {
        self.deal_street(TableStatus::BeforeFlop, 0..3, TableStatus::BeforeTurn)
    }

    /// Burn a card and deal the turn.
    pub fn deal_the_turn(&mut self) -> Result<(), MadeHandError> {
        self.deal_street(TableStatus::BeforeTurn, 3..4, TableStatus::BeforeRiver)
    }

    /// Burn a card and deal the river.
    pub fn deal_the_river(&mut self) -> Result<(), MadeHandError> {
        self.deal_street(TableStatus::BeforeRiver, 4..5, TableStatus::Complete)
    }

    fn deal_street(
        &mut self,
        expected: TableStatus,
        slots: Range<usize>,
        next: TableStatus,
    ) -> Result<(), MadeHandError> {
        if self.status != expected {
            #[cfg(feature = "tracing")]
            debug!(%expected, actual = %self.status, "Street dealt out of order");
            return Err(MadeHandError::WrongStreet {
                expected,
                actual: self.status,
            });
        }
        let needed = expected.cards_to_finish();
        if self.deck.len() < needed {
            #[cfg(feature = "tracing")]
            debug!(needed, left = self.deck.len(), "Deck too short for the board");
            return Err(MadeHandError::NotEnoughCards {
                needed,
                left: self.deck.len(),
            });
        }

        let _burn = self.deck.deal()?;
        for slot in &mut self.community[slots] {
            *slot = Some(self.deck.deal()?);
        }
        self.status = next;

        #[cfg(feature = "tracing")]
        trace!(status = %self.status, table = %self, "Dealt street");
        Ok(())
    }

    /// The five community bytes, 0 for slots not dealt yet.
    pub fn community_bytes(&self) -> [u8; 5] {
        self.community.map(Card::optional_to_byte)
    }

    /// The finished board. Fails until the river is dealt.
    pub fn to_final(&self) -> Result<Board, MadeHandError> {
        match self.community {
            [Some(a), Some(b), Some(c), Some(turn), Some(river)]
                if self.status == TableStatus::Complete =>
            {
                Board::new([a, b, c], turn, river)
            }
            _ => Err(MadeHandError::WrongStreet {
                expected: TableStatus::Complete,
                actual: self.status,
            }),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cards(&self.cards()))
    }
}
