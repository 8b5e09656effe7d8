use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Endian, Tag};

macro_rules! write_ordered {
    ($self:ident, $method:ident, $order:expr, $v:expr) => {
        match $order {
            Endian::Big => $self.$method::<BigEndian>($v)?,
            Endian::Little => $self.$method::<LittleEndian>($v)?,
        }
    };
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_type_byte(tag.into())
    }

    fn write_type_byte(&mut self, byte: u8) -> Result<()> {
        self.write_u8(byte)?;
        Ok(())
    }

    /// Writes the raw UTF-8 bytes behind a 16 bit length.
    fn write_size_prefixed_str(&mut self, order: Endian, s: &str) -> Result<()> {
        let len: u16 = s
            .len()
            .try_into()
            .map_err(|_| Error::length_overflow("string", s.len()))?;
        write_ordered!(self, write_u16, order, len);
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, order: Endian, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::length_overflow("array", len))?;
        write_ordered!(self, write_i32, order, len);
        Ok(())
    }

    fn write_long_len(&mut self, order: Endian, len: usize) -> Result<()> {
        let len: i64 = len
            .try_into()
            .map_err(|_| Error::length_overflow("array", len))?;
        write_ordered!(self, write_i64, order, len);
        Ok(())
    }

    fn write_nbt_i16(&mut self, order: Endian, v: i16) -> Result<()> {
        write_ordered!(self, write_i16, order, v);
        Ok(())
    }

    fn write_nbt_i32(&mut self, order: Endian, v: i32) -> Result<()> {
        write_ordered!(self, write_i32, order, v);
        Ok(())
    }

    fn write_nbt_i64(&mut self, order: Endian, v: i64) -> Result<()> {
        write_ordered!(self, write_i64, order, v);
        Ok(())
    }

    fn write_nbt_f32(&mut self, order: Endian, v: f32) -> Result<()> {
        write_ordered!(self, write_f32, order, v);
        Ok(())
    }

    fn write_nbt_f64(&mut self, order: Endian, v: f64) -> Result<()> {
        write_ordered!(self, write_f64, order, v);
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
