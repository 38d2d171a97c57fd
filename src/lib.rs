#![deny(clippy::all)]
#![warn(missing_docs)]

//! `made_hand` finds the best five card poker hand out of five to seven
//! cards.
//!
//! The result of an evaluation is a [`core::MadeHand`]: the hand type, the
//! five cards played (strongest first), a score that compares across every
//! hand, and the alternate cards of the same value that could stand in for a
//! played card without changing the outcome. Showdown code uses the
//! alternates to audit kicker level ties.
//!
//! ```
//! use made_hand::core::{HandType, MakeHand, parse_cards};
//!
//! let cards = parse_cards("Ah Ad Kh Kd Qh Qd Jh").unwrap();
//! let hand = cards.make_hand().unwrap();
//! assert_eq!(HandType::TwoPair, hand.hand_type());
//! assert_eq!("Ah Ad Kh Kd Qh", made_hand::core::format_cards(hand.played()));
//! ```
//!
//! Made hands round trip through a fixed 21 byte layout:
//!
//! ```
//! use made_hand::core::{MadeHand, evaluate, parse_cards};
//!
//! let hand = evaluate(&parse_cards("3h 4d 5c 6s 7h").unwrap()).unwrap();
//! let bytes = hand.to_bytes();
//! assert_eq!(hand, MadeHand::from_bytes(&bytes).unwrap());
//! ```

/// Cards, grouping, evaluation and the binary codec.
pub mod core;
/// Hold'em containers and the showdown resolver.
pub mod holdem;
