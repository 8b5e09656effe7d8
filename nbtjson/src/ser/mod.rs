//! This module contains the binary writer for the typed tag tree. Use
//! [`to_bytes`] or [`to_writer`], or drive an [`Encoder`] directly when the
//! tags are produced one at a time.
//!
//! The layout of every payload is fixed:
//!
//! | Tag        | Layout                                                  |
//! |------------|---------------------------------------------------------|
//! | Byte       | 1 byte                                                  |
//! | Short      | 2 bytes                                                 |
//! | Int        | 4 bytes                                                 |
//! | Long       | 8 bytes                                                 |
//! | Float      | 4 byte IEEE-754                                         |
//! | Double     | 8 byte IEEE-754                                         |
//! | Byte Array | 4 byte length, then 1 byte per element                  |
//! | String     | 2 byte length, then the raw UTF-8 bytes                 |
//! | List       | element tag byte, 4 byte length, then bare payloads     |
//! | Compound   | full child tags, then a single End byte                 |
//! | Int Array  | 4 byte length, then 4 bytes per element                 |
//! | Long Array | 8 byte length, then 8 bytes per element                 |
mod write_nbt;

use std::io::Write;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{EncodeOpts, List, Payload, Tag, TagNode};

use write_nbt::WriteNbt;

/// Serialize some tags to NBT, appending to a byte vector.
pub fn to_bytes(nodes: &[TagNode], opts: &EncodeOpts) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_writer(&mut out, nodes, opts)?;
    Ok(out)
}

/// Serialize some tags to NBT, writing them to the given writer. The tags are
/// written one after the other with nothing in between.
pub fn to_writer<W: Write>(writer: W, nodes: &[TagNode], opts: &EncodeOpts) -> Result<()> {
    let mut encoder = Encoder::new(writer, *opts);
    for node in nodes {
        encoder.write_tag(node)?;
    }
    debug!(
        "wrote {} top level tags ({:?} endian)",
        nodes.len(),
        opts.byte_order
    );
    Ok(())
}

/// Writer state for one encoding pass: the sink and the options it was
/// started with. The byte order never changes part way through.
pub struct Encoder<W: Write> {
    writer: W,
    opts: EncodeOpts,
    depth: usize,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, opts: EncodeOpts) -> Self {
        Self {
            writer,
            opts,
            depth: 0,
        }
    }

    /// Get the writer back, eg to finish a compressor wrapped around it.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a complete tag: type byte, name, payload.
    pub fn write_tag(&mut self, node: &TagNode) -> Result<()> {
        let order = self.opts.byte_order;
        trace!("tag {} {:?}", node.tag(), node.name);

        self.writer.write_tag(node.tag())?;
        self.writer.write_size_prefixed_str(order, &node.name)?;
        self.write_payload(&node.payload)
            .map_err(|e| e.context(format!("{} {:?}", node.tag(), node.name)))
    }

    /// Write the payload alone, as used for list elements.
    pub fn write_payload(&mut self, payload: &Payload) -> Result<()> {
        let order = self.opts.byte_order;

        match payload {
            Payload::Byte(v) => self.writer.write_all(&[*v as u8])?,
            Payload::Short(v) => self.writer.write_nbt_i16(order, *v)?,
            Payload::Int(v) => self.writer.write_nbt_i32(order, *v)?,
            Payload::Long(v) => self.writer.write_nbt_i64(order, *v)?,
            Payload::Float(v) => self.writer.write_nbt_f32(order, *v)?,
            Payload::Double(v) => self.writer.write_nbt_f64(order, *v)?,
            Payload::ByteArray(bs) => {
                self.writer.write_len(order, bs.len())?;
                let raw: Vec<u8> = bs.iter().map(|b| *b as u8).collect();
                self.writer.write_all(&raw)?;
            }
            Payload::String(s) => self.writer.write_size_prefixed_str(order, s)?,
            Payload::List(list) => self.nested(|enc| enc.write_list(list))?,
            Payload::Compound(children) => self.nested(|enc| {
                for child in children {
                    enc.write_tag(child)?;
                }
                enc.writer.write_tag(Tag::End)
            })?,
            Payload::IntArray(is) => {
                self.writer.write_len(order, is.len())?;
                for i in is {
                    self.writer.write_nbt_i32(order, *i)?;
                }
            }
            Payload::LongArray(ls) => {
                self.writer.write_long_len(order, ls.len())?;
                for l in ls {
                    self.writer.write_nbt_i64(order, *l)?;
                }
            }
        }

        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        let order = self.opts.byte_order;
        // Only an empty list can declare a byte that is not a tag, and End
        // matches no payload.
        let element = list.element().unwrap_or(Tag::End);

        self.writer.write_type_byte(list.element_byte())?;
        self.writer.write_len(order, list.items().len())?;

        for (i, item) in list.items().iter().enumerate() {
            if item.tag() != element {
                return Err(Error::list_element_mismatch(element, item.tag())
                    .context(format!("element {}", i)));
            }
            self.write_payload(item)
                .map_err(|e| e.context(format!("element {}", i)))?;
        }

        Ok(())
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_exceeded(self.opts.max_depth));
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }
}
