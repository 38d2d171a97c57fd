use std::str::FromStr;

use crate::core::{Card, MadeHandError, Suit, Value};

impl Value {
    /// Parse a value from a digit, a letter or an english name.
    ///
    /// Matching ignores case and accepts plurals, so `"10"`, `"t"`, `"Ten"`
    /// and `"tens"` are all [`Value::Ten`].
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::Value;
    ///
    /// assert_eq!(Some(Value::Two), Value::from_name("Deuces"));
    /// assert_eq!(Some(Value::Six), Value::from_name("sixes"));
    /// assert_eq!(None, Value::from_name("1"));
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let value = match name.to_ascii_lowercase().as_str() {
            "2" | "two" | "twos" | "deuce" | "deuces" => Value::Two,
            "3" | "three" | "threes" | "trey" | "treys" => Value::Three,
            "4" | "four" | "fours" => Value::Four,
            "5" | "five" | "fives" => Value::Five,
            "6" | "six" | "sixes" => Value::Six,
            "7" | "seven" | "sevens" => Value::Seven,
            "8" | "eight" | "eights" => Value::Eight,
            "9" | "nine" | "nines" => Value::Nine,
            "10" | "t" | "ten" | "tens" => Value::Ten,
            "j" | "jack" | "jacks" => Value::Jack,
            "q" | "queen" | "queens" => Value::Queen,
            "k" | "king" | "kings" => Value::King,
            "a" | "ace" | "aces" => Value::Ace,
            _ => return None,
        };
        Some(value)
    }
}

impl Suit {
    /// Parse a suit from its letter or english name, singular or plural,
    /// ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let suit = match name.to_ascii_lowercase().as_str() {
            "h" | "heart" | "hearts" => Suit::Heart,
            "d" | "diamond" | "diamonds" => Suit::Diamond,
            "c" | "club" | "clubs" => Suit::Club,
            "s" | "spade" | "spades" => Suit::Spade,
            _ => return None,
        };
        Some(suit)
    }
}

impl Card {
    /// Parse a single card, giving `None` when the text isn't one.
    ///
    /// Two shapes are understood: a short code such as `Ah`, `td` or `10c`,
    /// and a long form such as `Queen of Spades`.
    ///
    /// # Examples
    ///
    /// ```
    /// use made_hand::core::{Card, Suit, Value};
    ///
    /// let qs = Card::new(Value::Queen, Suit::Spade);
    /// assert_eq!(Some(qs), Card::parse("Qs"));
    /// assert_eq!(Some(qs), Card::parse("queen of spades"));
    /// assert_eq!(None, Card::parse("Qx"));
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        parse_short(text).or_else(|| parse_long(text))
    }
}

/// `<value><suit letter>`, where the value is one character or `10`.
fn parse_short(text: &str) -> Option<Card> {
    let mut chars = text.chars();
    let suit = chars.next_back()?;
    let value = chars.as_str();

    let mut value_chars = value.chars();
    let first = value_chars.next()?;
    if !matches!(first.to_ascii_uppercase(), 'T' | 'J' | 'Q' | 'K' | 'A' | '0'..='9') {
        return None;
    }
    match value_chars.next() {
        None | Some('0') => {}
        Some(_) => return None,
    }
    if value_chars.next().is_some() || !matches!(suit.to_ascii_lowercase(), 'h' | 'd' | 'c' | 's')
    {
        return None;
    }

    let mut suit_buf = [0u8; 4];
    Some(Card::new(
        Value::from_name(value)?,
        Suit::from_name(suit.encode_utf8(&mut suit_buf))?,
    ))
}

/// `<value name> of <suit name>`.
fn parse_long(text: &str) -> Option<Card> {
    let mut words = text.split_whitespace();
    let value = Value::from_name(words.next()?)?;
    if !words.next()?.eq_ignore_ascii_case("of") {
        return None;
    }
    let suit = Suit::from_name(words.next()?)?;
    match words.next() {
        None => Some(Card::new(value, suit)),
        Some(_) => None,
    }
}

impl FromStr for Card {
    type Err = MadeHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s).ok_or_else(|| MadeHandError::UnparseableCard(s.to_string()))
    }
}

/// Parse a whitespace separated list of short card codes.
///
/// The list is all or nothing: one bad token fails the whole parse. Empty
/// input gives an empty list.
///
/// # Examples
///
/// ```
/// use made_hand::core::{MadeHandError, parse_cards};
///
/// assert_eq!(3, parse_cards("Ah  Kd 10c").unwrap().len());
/// assert_eq!(
///     Err(MadeHandError::UnparseableCard("Zz".to_string())),
///     parse_cards("Ah Zz")
/// );
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, MadeHandError> {
    text.split_whitespace()
        .map(|token| {
            parse_short(token).ok_or_else(|| MadeHandError::UnparseableCard(token.to_string()))
        })
        .collect()
}

/// Space separated short codes, the inverse of [`parse_cards`].
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
