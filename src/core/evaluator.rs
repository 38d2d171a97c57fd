use crate::core::{
    sorted_strongest_first, Alternates, Card, CardBitSet, HandGrouping, HandType, MadeHand,
    MadeHandError, Suit, Value, MAX_CARDS, MIN_CARDS,
};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Find the best five card hand that can be made from 5 to 7 cards.
///
/// The cards can come in any order and must all be different. Hand types are
/// tried from the strongest down and the first one that can be made wins.
///
/// # Examples
///
/// ```
/// use made_hand::core::{evaluate, format_cards, parse_cards, HandType};
///
/// let hand = evaluate(&parse_cards("Ah 2d 3c 4s 5h 9d Jc").unwrap()).unwrap();
/// assert_eq!(HandType::Straight, hand.hand_type());
/// // The ace plays low in the wheel.
/// assert_eq!("5h 4s 3c 2d Ah", format_cards(hand.played()));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<MadeHand, MadeHandError> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        #[cfg(feature = "tracing")]
        debug!(count = cards.len(), "Refusing to evaluate cards");
        return Err(MadeHandError::WrongCardCount(cards.len()));
    }

    let cards = sorted_strongest_first(cards);
    let groups = HandGrouping::new(&cards)?;

    let hand = straight_flush(&cards)
        .or_else(|| four_of_a_kind(&cards, &groups))
        .or_else(|| full_house(&cards, &groups))
        .or_else(|| flush(&cards))
        .or_else(|| straight(&cards))
        .or_else(|| three_of_a_kind(&cards, &groups))
        .or_else(|| two_pair(&cards, &groups))
        .or_else(|| pair(&cards, &groups))
        .or_else(|| high_card(&cards))
        .unwrap_or_else(|| unreachable!("Every 5 card set makes at least a high card"));

    #[cfg(feature = "tracing")]
    trace!(hand_type = %hand.hand_type(), ?cards, played = ?hand.played(), "Made hand");

    Ok(hand)
}

/// Anything that holds cards can be made into a hand.
pub trait MakeHand {
    /// The cards to make the hand from.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Make the best five card hand out of the cards.
    ///
    /// # Examples
    /// ```
    /// use made_hand::core::{HandType, MakeHand, parse_cards};
    ///
    /// let hand = parse_cards("2h 2d 8d 8s Kd 6s Th").unwrap().make_hand().unwrap();
    /// assert_eq!(HandType::TwoPair, hand.hand_type());
    /// ```
    fn make_hand(&self) -> Result<MadeHand, MadeHandError> {
        let cards: Vec<Card> = self.cards().collect();
        evaluate(&cards)
    }
}

impl MakeHand for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl MakeHand for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl MakeHand for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl MakeHand for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.into_iter()
    }
}

/// Build the hand from exactly five played cards, attaching alternates for
/// the trailing positions the hand type allows.
fn made(
    hand_type: HandType,
    played: impl IntoIterator<Item = Card>,
    cards: &[Card],
) -> Option<MadeHand> {
    let played: Vec<Card> = played.into_iter().take(5).collect();
    let played: [Card; 5] = played.try_into().ok()?;
    let alternates = face_alternates(&played, cards, hand_type.alternate_depth());
    Some(MadeHand::new(hand_type, played, alternates))
}

/// For each of the last `depth` played cards every other card of the same
/// value. Other played cards count too.
fn face_alternates(played: &[Card; 5], cards: &[Card], depth: usize) -> Option<Alternates> {
    Alternates::new(played[5 - depth..].iter().map(|play| {
        let alts = cards
            .iter()
            .filter(|c| c.value == play.value && c.suit != play.suit)
            .copied()
            .collect();
        (*play, alts)
    }))
}

fn flatten(groups: &[Vec<Card>]) -> impl Iterator<Item = Card> + '_ {
    groups.iter().flatten().copied()
}

fn high_card(cards: &[Card]) -> Option<MadeHand> {
    made(HandType::HighCard, cards.iter().copied(), cards)
}

fn pair(cards: &[Card], groups: &HandGrouping) -> Option<MadeHand> {
    if groups.pairs().len() != 1 || groups.singles().len() < 3 {
        return None;
    }
    let played = flatten(&groups.pairs()[..1]).chain(flatten(groups.singles()).take(3));
    made(HandType::Pair, played, cards)
}

fn two_pair(cards: &[Card], groups: &HandGrouping) -> Option<MadeHand> {
    let pairs = groups.pairs();
    if pairs.len() < 2 {
        return None;
    }
    // A third pair can only play as the kicker.
    let kickers = sorted_strongest_first(
        &flatten(&pairs[2..])
            .chain(flatten(groups.singles()))
            .collect::<Vec<_>>(),
    );
    let played = flatten(&pairs[..2]).chain(kickers.into_iter().take(1));
    made(HandType::TwoPair, played, cards)
}

fn three_of_a_kind(cards: &[Card], groups: &HandGrouping) -> Option<MadeHand> {
    let (set, rest) = groups.three_of_a_kind().split_first()?;
    let kickers = sorted_strongest_first(
        &flatten(rest)
            .chain(flatten(groups.pairs()))
            .chain(flatten(groups.singles()))
            .collect::<Vec<_>>(),
    );
    let played = set.iter().copied().chain(kickers.into_iter().take(2));
    made(HandType::ThreeOfAKind, played, cards)
}

fn straight(cards: &[Card]) -> Option<MadeHand> {
    let run = find_straight(cards, false)?;
    made(HandType::Straight, run, cards)
}

fn flush(cards: &[Card]) -> Option<MadeHand> {
    Suit::suits().into_iter().find_map(|suit| {
        let suited: Vec<Card> = cards.iter().filter(|c| c.suit == suit).copied().collect();
        if suited.len() < 5 {
            return None;
        }
        made(HandType::Flush, suited, cards)
    })
}

fn full_house(cards: &[Card], groups: &HandGrouping) -> Option<MadeHand> {
    let (set, rest) = groups.three_of_a_kind().split_first()?;
    // A second set fills in with its two strongest cards.
    let filler = match rest.first() {
        Some(second_set) => &second_set[..2],
        None => groups.pairs().first()?.as_slice(),
    };
    made(
        HandType::FullHouse,
        set.iter().chain(filler).copied(),
        cards,
    )
}

fn four_of_a_kind(cards: &[Card], groups: &HandGrouping) -> Option<MadeHand> {
    let quads = groups.four_of_a_kind().first()?;
    let kickers = sorted_strongest_first(
        &flatten(groups.three_of_a_kind())
            .chain(flatten(groups.pairs()))
            .chain(flatten(groups.singles()))
            .collect::<Vec<_>>(),
    );
    let played = quads.iter().copied().chain(kickers.into_iter().take(1));
    made(HandType::FourOfAKind, played, cards)
}

fn straight_flush(cards: &[Card]) -> Option<MadeHand> {
    let run = find_straight(cards, true)?;
    let hand_type = if run[0].value == Value::Ace {
        HandType::RoyalFlush
    } else {
        HandType::StraightFlush
    };
    made(hand_type, run, cards)
}

/// Find the highest run of five values in cards sorted strongest first,
/// optionally all in the suit of the run's top card.
///
/// The ace plays low only to finish a run that tops out at five, so the
/// wheel comes back as `5 4 3 2 A` and scores below a six high straight.
fn find_straight(cards: &[Card], same_suit: bool) -> Option<Vec<Card>> {
    let first = cards.first()?;
    // An ace on top leaves room for a run of four that the ace closes.
    let needed = if first.value == Value::Ace { 3 } else { 4 };

    for start in 0..cards.len().saturating_sub(needed) {
        let top = cards[start];
        let mut run = Vec::with_capacity(5);
        run.push(top);
        let mut last = top;

        for next in &cards[start + 1..] {
            if next.value == last.value {
                continue;
            }
            if next.value.number() + 1 < last.value.number() {
                break;
            }
            if same_suit && next.suit != top.suit {
                continue;
            }
            last = *next;
            run.push(*next);
            if run.len() == 5 {
                return Some(run);
            }
        }

        if run.len() == 4 && top.value == Value::Five {
            let ace = cards
                .iter()
                .take_while(|c| c.value == Value::Ace)
                .find(|c| !same_suit || c.suit == top.suit);
            if let Some(ace) = ace {
                run.push(*ace);
                return Some(run);
            }
        }
    }
    None
}
