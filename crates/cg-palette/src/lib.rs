//! The palette consumed by the color code generator.
//!
//! Holds the hand-edited [`COLORS`] table together with the two pure transforms applied to each
//! entry: [`pascal_case`] for the variant name and [`decode_hex`] for the channel values.

mod hex;
mod name;
mod table;

pub use hex::{decode_hex, ChannelTuple, HexError};
pub use name::pascal_case;
pub use table::{ColorEntry, COLORS};
