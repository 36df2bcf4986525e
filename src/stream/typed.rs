//! Typed read/write: integer, float, dan UTF-8 string
//!
//! Writer menerima integer lebar (`u64`/`i64`) supaya range check bermakna;
//! reader mengembalikan tipe dengan lebar yang pas. Typed read yang kekurangan
//! bytes selalu gagal dengan [`Error::EndOfStream`], cursor tidak bergerak.

use super::Stream;
use crate::error::{Error, Result};
use crate::protocol::codec;

impl Stream {
    #[inline(always)]
    fn read_uint(&mut self, width: usize) -> Result<u64> {
        let order = self.byte_order;
        codec::unpack_uint(self.take(width)?, order)
    }

    #[inline(always)]
    fn read_int(&mut self, width: usize) -> Result<i64> {
        let order = self.byte_order;
        codec::unpack_int(self.take(width)?, order)
    }

    #[inline(always)]
    fn write_uint(&mut self, value: u64, width: usize) -> Result<()> {
        let order = self.byte_order;
        let storage = self.live_mut()?;

        let mut buf = [0u8; 4];
        codec::pack_uint(value, order, &mut buf[..width])?;
        storage.write(&buf[..width]);
        Ok(())
    }

    #[inline(always)]
    fn write_int(&mut self, value: i64, width: usize) -> Result<()> {
        let order = self.byte_order;
        let storage = self.live_mut()?;

        let mut buf = [0u8; 4];
        codec::pack_int(value, order, &mut buf[..width])?;
        storage.write(&buf[..width]);
        Ok(())
    }

    /// Reads an `unsigned char` (0..=255).
    pub fn read_uchar(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Writes an `unsigned char`; values above 255 overflow.
    pub fn write_uchar(&mut self, value: u64) -> Result<()> {
        self.write_uint(value, 1)
    }

    /// Reads a `char` (-128..=127).
    pub fn read_char(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn write_char(&mut self, value: i64) -> Result<()> {
        self.write_int(value, 1)
    }

    /// Reads a 2 byte unsigned integer.
    pub fn read_ushort(&mut self) -> Result<u16> {
        Ok(self.read_uint(2)? as u16)
    }

    pub fn write_ushort(&mut self, value: u64) -> Result<()> {
        self.write_uint(value, 2)
    }

    /// Reads a 2 byte signed integer.
    pub fn read_short(&mut self) -> Result<i16> {
        Ok(self.read_int(2)? as i16)
    }

    pub fn write_short(&mut self, value: i64) -> Result<()> {
        self.write_int(value, 2)
    }

    /// Reads a 4 byte unsigned integer.
    pub fn read_ulong(&mut self) -> Result<u32> {
        Ok(self.read_uint(4)? as u32)
    }

    pub fn write_ulong(&mut self, value: u64) -> Result<()> {
        self.write_uint(value, 4)
    }

    /// Reads a 4 byte signed integer.
    pub fn read_long(&mut self) -> Result<i32> {
        Ok(self.read_int(4)? as i32)
    }

    pub fn write_long(&mut self, value: i64) -> Result<()> {
        self.write_int(value, 4)
    }

    /// Reads a 4 byte IEEE-754 float.
    pub fn read_float(&mut self) -> Result<f32> {
        let order = self.byte_order;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(self.take(4)?);
        Ok(codec::unpack_f32(bytes, order))
    }

    pub fn write_float(&mut self, value: f32) -> Result<()> {
        let bytes = codec::pack_f32(value, self.byte_order);
        self.write(&bytes)
    }

    /// Reads an 8 byte IEEE-754 float.
    pub fn read_double(&mut self) -> Result<f64> {
        let order = self.byte_order;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.take(8)?);
        Ok(codec::unpack_f64(bytes, order))
    }

    pub fn write_double(&mut self, value: f64) -> Result<()> {
        let bytes = codec::pack_f64(value, self.byte_order);
        self.write(&bytes)
    }

    /// Baca tepat `byte_length` bytes dan decode sebagai UTF-8 (strict).
    ///
    /// # Errors
    /// - [`Error::EndOfStream`] jika bytes tidak cukup
    /// - [`Error::Decode`] jika bukan UTF-8 valid; cursor tidak bergerak
    pub fn read_utf8_string(&mut self, byte_length: usize) -> Result<String> {
        let storage = self.live_mut()?;
        if byte_length > storage.remaining() {
            return Err(Error::EndOfStream {
                requested: byte_length,
            });
        }

        let text = std::str::from_utf8(storage.peek(byte_length))?.to_owned();
        storage.set_position(storage.position() + byte_length);
        Ok(text)
    }

    /// Tulis `text` sebagai UTF-8
    pub fn write_utf8_string(&mut self, text: &str) -> Result<()> {
        self.write(text.as_bytes())
    }

    /// Tulis raw bytes yang diklaim sebagai teks; divalidasi strict dulu
    pub fn write_utf8_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes)?;
        self.write_utf8_string(text)
    }
}
