//! An Uno card model with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type that knows its color, rank, and
//! face value, along with the pure rules defined over that identity: the
//! forfeit cost it counts against a player caught holding it, whether
//! playing it asks for a color call, and whether it is a legal play on the
//! top of the discard pile.
//!
//! There is no game engine here. Turn order, the draw pile, and scoring
//! across rounds belong to a surrounding game, which consumes this type and
//! supplies the called color at comparison time.
//!
//! # Example
//!
//! ```
//! use unors::{Card, Color, Rank};
//!
//! let up_card = Card::numbered(Color::Blue, 6);
//! let reply = Card::numbered(Color::Red, 6);
//! assert!(reply.can_play_on(up_card, Color::Blue));
//! assert_eq!(reply.forfeit_cost(), 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;

// Re-export main types
pub use card::{Card, Color, Rank};
pub use error::ParseCardError;
