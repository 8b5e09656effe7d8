//! nbtjson converts a tagged JSON (or YAML) description of NBT data into the
//! binary *Named Binary Tag* format used by *Minecraft*.
//!
//! The document format is a root object holding an `nbt` array of tags. Every
//! tag names its kind with a numeric `tagType`, carries a `name` and a
//! type-dependent `value`:
//!
//! ```json
//! {
//!   "nbt": [
//!     {
//!       "tagType": 10,
//!       "name": "",
//!       "value": [
//!         { "tagType": 8, "name": "greeting", "value": "hi" },
//!         { "tagType": 9, "name": "pos", "value": { "tagListType": 6, "list": [1.5, 64, -3] } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! * For converting whole documents see [`json_to_nbt`] and [`yaml_to_nbt`].
//! * For the typed tag tree see [`TagNode`] and [`Payload`].
//! * For writing a tree you built yourself see [`to_bytes`] and [`to_writer`].
//!
//! The output is uncompressed. Wrap the writer given to [`to_writer`] in a
//! compressor (eg `flate2::write::GzEncoder`) if you need a compressed file.
//!
//! # Quick example
//!
//! ```
//! use nbtjson::{json_to_nbt, EncodeOpts};
//!
//! let json = br#"{"nbt":[{"tagType":8,"name":"greeting","value":"hi"}]}"#;
//! let bytes = json_to_nbt(json, &EncodeOpts::new()).unwrap();
//!
//! assert_eq!(
//!     bytes,
//!     [0x08, 0x00, 0x08, b'g', b'r', b'e', b'e', b't', b'i', b'n', b'g', 0x00, 0x02, b'h', b'i']
//! );
//! ```
//!
//! # Byte order
//!
//! Java Edition uses big endian NBT, Bedrock Edition uses little endian. The
//! order is picked once per call with [`EncodeOpts::byte_order`] and applies
//! to every multi-byte number and length prefix.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod json;
pub mod ser;

mod node;

pub use error::{Error, ErrorKind, Result};
pub use json::{json_to_nbt, json_value_to_nbt, yaml_to_nbt};
pub use node::*;
pub use ser::{to_bytes, to_writer, Encoder};

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a string of raw UTF-8 bytes.
    String = 8,
    /// Represents a list of unnamed payloads of one declared type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl TryFrom<i64> for Tag {
    type Error = ();

    /// The `tagType` numbers found in documents are never truncated to a byte
    /// first, so 266 is rejected rather than read as a Compound.
    fn try_from(value: i64) -> std::result::Result<Self, ()> {
        u8::try_from(value)
            .map_err(|_| ())
            .and_then(|b| Tag::try_from(b))
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "Byte Array",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
            Tag::IntArray => "Int Array",
            Tag::LongArray => "Long Array",
        };
        f.write_str(name)
    }
}

/// Byte order applied to every multi-byte field of one encoding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    /// Java Edition NBT.
    #[default]
    Big,
    /// Bedrock Edition NBT.
    Little,
}

/// Options for customizing the encoding.
///
/// Options can be read from a config file. Missing fields take their default:
///
/// ```
/// use nbtjson::{EncodeOpts, Endian};
///
/// let opts: EncodeOpts = serde_yaml::from_str("byte_order: little").unwrap();
/// assert_eq!(opts, EncodeOpts::new().byte_order(Endian::Little));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct EncodeOpts {
    /// Byte order of numbers and length prefixes.
    pub byte_order: Endian,

    /// Maximum number of nested compounds and lists. Documents nesting deeper
    /// than this fail with [`ErrorKind::DepthExceeded`] instead of recursing
    /// without bound.
    pub max_depth: usize,
}

impl EncodeOpts {
    /// Default depth limit, comfortably above anything the game writes.
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Create new options. Big endian with the default depth limit.
    pub fn new() -> Self {
        Default::default()
    }

    /// Options for Bedrock Edition's little endian NBT.
    pub fn bedrock() -> Self {
        Self::new().byte_order(Endian::Little)
    }

    /// Set the byte order.
    pub fn byte_order(mut self, byte_order: Endian) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the maximum nesting depth of compounds and lists.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EncodeOpts {
    fn default() -> Self {
        Self {
            byte_order: Endian::Big,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
