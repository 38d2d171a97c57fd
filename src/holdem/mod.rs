/// Module with a player's two hole cards.
mod pocket;
/// Export `Pocket`
pub use self::pocket::Pocket;

/// Module with the five community cards.
mod board;
/// Export `Board`
pub use self::board::Board;

/// Module that deals the board street by street.
mod table;
/// Export `Table` and `TableStatus`
pub use self::table::{Table, TableStatus};

/// Module for resolving who holds the best hand at showdown.
mod showdown;
/// Export `Showdown`
pub use self::showdown::Showdown;
