//! Card, color, and rank types plus the play-legality rules.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// The color of a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// No intrinsic color. Carried by wild cards; the color a player calls
    /// after playing one lives in the surrounding game state, not on the card.
    None,
}

/// The rank of a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// A number card, face value 0 through 9.
    Number,
    /// Skips the next player's turn.
    Skip,
    /// Reverses the direction of play.
    Reverse,
    /// The next player draws two cards.
    DrawTwo,
    /// Wild card; the player calls the active color.
    Wild,
    /// Wild card; the player calls the active color and the next player
    /// draws four cards.
    WildDrawFour,
    /// House-rule card. Costs like a wild but does not call a color.
    Custom,
}

/// A single Uno card.
///
/// A card is a frozen value identified by its color, rank, and face value.
/// Not every field is meaningful for every card: wild cards have no color
/// ([`Color::None`]) and only number cards carry a face value.
///
/// Beyond its identity, a card knows its forfeit cost (how many points it
/// counts against a player stuck holding it), whether playing it asks for a
/// color call, and whether it is a legal play on a given up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The color, or [`Color::None`] for colorless cards.
    color: Color,
    /// The rank.
    rank: Rank,
    /// The face value. `Some` exactly when `rank` is [`Rank::Number`].
    number: Option<u8>,
}

impl Card {
    /// Creates a number card with the given face value.
    ///
    /// Note: This function does not validate the face value. Values outside
    /// 0..=9 are accepted but never occur in a standard deck.
    #[must_use]
    pub const fn numbered(color: Color, number: u8) -> Self {
        Self {
            color,
            rank: Rank::Number,
            number: Some(number),
        }
    }

    /// Creates a non-number card (skips, wilds, and so on).
    #[must_use]
    pub const fn special(color: Color, rank: Rank) -> Self {
        Self {
            color,
            rank,
            number: None,
        }
    }

    /// Creates a card with explicit control over all three fields.
    ///
    /// The face value is kept only when `rank` is [`Rank::Number`]; for any
    /// other rank it is discarded, so non-number cards always report `None`
    /// from [`number`](Self::number) no matter what was passed here.
    #[must_use]
    pub const fn new(color: Color, rank: Rank, number: Option<u8>) -> Self {
        let number = match rank {
            Rank::Number => number,
            _ => None,
        };
        Self {
            color,
            rank,
            number,
        }
    }

    /// Returns the color of this card, which is [`Color::None`] for wild
    /// and custom cards.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the rank of this card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the face value, which is `None` for every card whose rank is
    /// not [`Rank::Number`].
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        self.number
    }

    /// Returns the points this card counts against a player still holding it
    /// when another player goes out.
    ///
    /// Number cards cost their face value, action cards (skip, reverse, draw
    /// two) cost 20, and wild and custom cards cost 50.
    #[must_use]
    pub const fn forfeit_cost(&self) -> u8 {
        match self.rank {
            Rank::Number => match self.number {
                Some(n) => n,
                None => 0,
            },
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => 20,
            Rank::Wild | Rank::WildDrawFour | Rank::Custom => 50,
        }
    }

    /// Returns whether playing this card asks the player to call a color.
    ///
    /// True only for [`Rank::Wild`] and [`Rank::WildDrawFour`]. A
    /// [`Rank::Custom`] card shares the 50-point forfeit tier with the wilds
    /// but does not call a color.
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self.rank, Rank::Wild | Rank::WildDrawFour)
    }

    /// Returns whether this card may legally be placed on `up_card`, the
    /// card on top of the discard pile.
    ///
    /// `called_color` is the color currently in effect; it is consulted only
    /// when the up card is a wild.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Card, Color, Rank};
    ///
    /// let up_card = Card::special(Color::None, Rank::Wild);
    /// let reply = Card::numbered(Color::Blue, 6);
    /// assert!(reply.can_play_on(up_card, Color::Blue));
    /// assert!(!reply.can_play_on(up_card, Color::Red));
    /// ```
    #[must_use]
    pub fn can_play_on(&self, up_card: Card, called_color: Color) -> bool {
        // Plain color match.
        if self.color == up_card.color {
            return true;
        }
        // Playing into the called color after a wild.
        if self.color == called_color && up_card.is_wild() {
            return true;
        }
        // A wild may always be played.
        if self.is_wild() {
            return true;
        }
        // Two number cards with the same face value. A special-rank card
        // never matches here: its face value reads as absent.
        if self.rank == Rank::Number {
            return self.number == up_card.number;
        }
        // Two action cards of the same rank, colors aside.
        self.rank == up_card.rank
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::None => "None",
        })
    }
}

impl fmt::Display for Card {
    /// Formats as the color followed by the face value (`Blue6`); the rank
    /// is not included. Intended for diagnostics, not parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(n) => write!(f, "{}{n}", self.color),
            None => write!(f, "{}", self.color),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a compact card code.
    ///
    /// Colored cards are a color letter (`R`, `Y`, `G`, `B`) followed by a
    /// digit for number cards or `S` (skip), `R` (reverse), or `D` (draw
    /// two). Colorless cards are `W` (wild), `W4` (wild draw four), or `C`
    /// (custom).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseCardError::Empty)?;
        let card = match first {
            'W' => match chars.next() {
                None => Self::special(Color::None, Rank::Wild),
                Some('4') => Self::special(Color::None, Rank::WildDrawFour),
                Some(_) => return Err(ParseCardError::InvalidRank),
            },
            'C' => Self::special(Color::None, Rank::Custom),
            _ => {
                let color = match first {
                    'R' => Color::Red,
                    'Y' => Color::Yellow,
                    'G' => Color::Green,
                    'B' => Color::Blue,
                    _ => return Err(ParseCardError::InvalidColor),
                };
                match chars.next().ok_or(ParseCardError::InvalidRank)? {
                    d @ '0'..='9' => Self::numbered(color, d as u8 - b'0'),
                    'S' => Self::special(color, Rank::Skip),
                    'R' => Self::special(color, Rank::Reverse),
                    'D' => Self::special(color, Rank::DrawTwo),
                    _ => return Err(ParseCardError::InvalidRank),
                }
            }
        };
        if chars.next().is_some() {
            return Err(ParseCardError::TrailingInput);
        }
        Ok(card)
    }
}

/// Shorthand for creating cards from a compact code.
///
/// See the [`FromStr`] instance of [`Card`] for the grammar; this macro is
/// just calling it.
///
/// ```
/// use unors::{card, Card, Color};
///
/// assert_eq!(card!("B6"), Card::numbered(Color::Blue, 6));
/// ```
#[macro_export]
macro_rules! card {
    ($code:literal) => {
        <$crate::Card as core::str::FromStr>::from_str($code)
            .expect("Invalid card code given to card! macro")
    };
}
