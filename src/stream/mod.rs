//! Seekable Byte Stream
//!
//! Buffer yang bisa tumbuh + satu cursor + byte order yang bisa diganti.
//! Dua state saja: `Open` (awal) dan `Closed` (terminal). Setelah `close()`
//! semua operasi gagal dengan [`Error::Closed`], kecuali `close()` lagi.
//!
//! Kontrak read:
//! - 0 byte tersedia → [`Error::EndOfStream`]
//! - 1..n-1 byte tersedia → [`Error::ShortRead`]
//! - Read yang gagal tidak menggeser cursor

mod lines;
mod source;
mod typed;

use std::io::{self, SeekFrom};
use std::ops::Add;

use crate::config::StreamOptions;
use crate::core::Storage;
use crate::error::{Error, Result};
use crate::hexdump::hexdump;
use crate::protocol::ByteOrder;

pub use lines::Lines;
pub use source::{ByteSource, ReadSeek};

/// Buffered, position-tracked byte store dengan typed read/write
#[derive(Debug, Clone)]
pub struct Stream {
    // None setelah close()
    storage: Option<Storage>,
    byte_order: ByteOrder,
}

impl Default for Stream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream {
    /// Stream kosong, byte order Network
    pub fn new() -> Self {
        Self::with_options(StreamOptions::default())
    }

    pub fn with_options(options: StreamOptions) -> Self {
        Self {
            storage: Some(Storage::with_capacity(options.initial_capacity)),
            byte_order: options.byte_order,
        }
    }

    /// Stream berisi salinan verbatim dari `data`, cursor di 0
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: Some(Storage::from_vec(data.into())),
            byte_order: ByteOrder::default(),
        }
    }

    #[inline(always)]
    fn live(&self) -> Result<&Storage> {
        self.storage.as_ref().ok_or(Error::Closed)
    }

    #[inline(always)]
    fn live_mut(&mut self) -> Result<&mut Storage> {
        self.storage.as_mut().ok_or(Error::Closed)
    }

    #[inline(always)]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Ganti byte order. Hanya mempengaruhi pack/unpack berikutnya,
    /// bytes yang sudah ditulis tidak di-encode ulang.
    #[inline(always)]
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.storage.is_none()
    }

    /// Posisi cursor saat ini
    pub fn tell(&self) -> Result<usize> {
        Ok(self.live()?.position())
    }

    /// Total bytes di buffer, tidak tergantung posisi cursor
    pub fn length(&self) -> Result<usize> {
        Ok(self.live()?.len())
    }

    /// `length() - tell()`
    pub fn remaining(&self) -> Result<usize> {
        Ok(self.live()?.remaining())
    }

    /// True jika read 1 byte berikutnya akan gagal dengan EndOfStream
    pub fn at_eof(&self) -> Result<bool> {
        Ok(self.remaining()? == 0)
    }

    /// Pindahkan cursor. Target di luar `0..=length` ditolak.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<usize> {
        let storage = self.live_mut()?;
        let length = storage.len();

        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(delta) => storage.position() as i128 + i128::from(delta),
            SeekFrom::End(delta) => length as i128 + i128::from(delta),
        };

        if target < 0 || target > length as i128 {
            return Err(Error::InvalidSeek { target, length });
        }

        let target = target as usize;
        storage.set_position(target);
        Ok(target)
    }

    /// Seek dengan kode whence numerik: 0 = absolut, 1 = relatif ke cursor,
    /// 2 = relatif ke akhir buffer.
    pub fn seek_whence(&mut self, offset: i64, whence: u8) -> Result<usize> {
        let length = self.length()?;
        let pos = match whence {
            0 => SeekFrom::Start(u64::try_from(offset).map_err(|_| Error::InvalidSeek {
                target: i128::from(offset),
                length,
            })?),
            1 => SeekFrom::Current(offset),
            2 => SeekFrom::End(offset),
            other => return Err(Error::InvalidWidth(usize::from(other))),
        };
        self.seek(pos)
    }

    /// Lihat `size` bytes ke depan tanpa menggeser cursor.
    ///
    /// Hanya mengembalikan lebih sedikit bytes jika sampai akhir buffer.
    pub fn peek(&self, size: usize) -> Result<&[u8]> {
        Ok(self.live()?.peek(size))
    }

    /// Semua sisa bytes tanpa menggeser cursor
    pub fn peek_all(&self) -> Result<&[u8]> {
        Ok(self.live()?.tail())
    }

    /// Baca tepat `n` bytes.
    ///
    /// # Errors
    /// - [`Error::EndOfStream`] jika tidak ada byte tersisa (dan `n > 0`)
    /// - [`Error::ShortRead`] jika hanya sebagian yang tersedia
    pub fn read(&mut self, n: usize) -> Result<&[u8]> {
        let storage = self.live_mut()?;
        let available = storage.remaining();

        if n > available {
            tracing::trace!(requested = n, available, "read past end of stream");
            return Err(if available == 0 {
                Error::EndOfStream { requested: n }
            } else {
                Error::ShortRead {
                    requested: n,
                    available,
                }
            });
        }

        Ok(storage.read(n))
    }

    /// Baca semua sisa bytes (bisa kosong)
    pub fn read_all(&mut self) -> Result<&[u8]> {
        let storage = self.live_mut()?;
        let n = storage.remaining();
        Ok(storage.read(n))
    }

    /// Baca tepat `n` bytes untuk typed read; kekurangan apa pun = EndOfStream
    #[inline(always)]
    pub(crate) fn take(&mut self, n: usize) -> Result<&[u8]> {
        let storage = self.live_mut()?;
        if n > storage.remaining() {
            tracing::trace!(requested = n, available = storage.remaining(), "typed read past end");
            return Err(Error::EndOfStream { requested: n });
        }
        Ok(storage.read(n))
    }

    /// Baca sampai dan termasuk `\n` berikutnya, atau sampai akhir buffer
    pub fn readline(&mut self) -> Result<&[u8]> {
        let storage = self.live_mut()?;
        let start = storage.position();
        let end = lines::line_end(storage.as_bytes(), start);
        Ok(storage.read(end - start))
    }

    /// Semua sisa baris. `size_hint > 0` berhenti setelah minimal sebanyak
    /// itu bytes terkumpul; baris tidak pernah dipotong.
    pub fn readlines(&mut self, size_hint: usize) -> Result<Vec<&[u8]>> {
        let mut lines = Vec::new();
        let mut total = 0usize;

        for line in self.lines()? {
            total += line.len();
            lines.push(line);
            if size_hint > 0 && total >= size_hint {
                break;
            }
        }

        Ok(lines)
    }

    /// Iterator baris yang menggeser cursor
    pub fn lines(&mut self) -> Result<Lines<'_>> {
        let (buf, pos) = self.live_mut()?.split_cursor();
        Ok(Lines::new(buf, pos))
    }

    /// Tulis bytes di cursor (overwrite/append), cursor maju
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.live_mut()?.write(data);
        Ok(())
    }

    pub fn writelines<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let storage = self.live_mut()?;
        for line in lines {
            storage.write(line.as_ref());
        }
        Ok(())
    }

    /// Seluruh isi buffer, tidak peduli posisi cursor
    pub fn getvalue(&self) -> Result<&[u8]> {
        Ok(self.live()?.as_bytes())
    }

    /// Potong buffer ke `size` bytes (`0` = kosongkan).
    ///
    /// Cursor di-clamp ke panjang baru.
    pub fn truncate(&mut self, size: usize) -> Result<()> {
        let storage = self.live_mut()?;
        let before = storage.len();
        storage.truncate(size);
        tracing::debug!(before, after = storage.len(), "stream truncated");
        Ok(())
    }

    /// No-op selain cek liveness; data selalu ada di memory
    pub fn flush(&mut self) -> Result<()> {
        self.live()?;
        Ok(())
    }

    /// Lepaskan storage. Idempotent.
    pub fn close(&mut self) {
        if let Some(storage) = self.storage.take() {
            tracing::debug!(len = storage.len(), "stream closed");
        }
    }

    /// Stream baru: isi `self` lalu isi `other`, cursor 0, byte order dari `self`.
    ///
    /// Posisi kedua operand tidak berubah.
    pub fn concat(&self, other: &Stream) -> Result<Stream> {
        let left = self.live()?.as_bytes();
        let right = other.live()?.as_bytes();

        let mut storage = Storage::with_capacity(left.len() + right.len());
        storage.write(left);
        storage.write(right);
        storage.set_position(0);

        tracing::debug!(left = left.len(), right = right.len(), "streams concatenated");
        Ok(Stream {
            storage: Some(storage),
            byte_order: self.byte_order,
        })
    }

    /// Hexdump seluruh buffer
    pub fn hexdump(&self) -> Result<String> {
        Ok(hexdump(self.live()?.as_bytes()))
    }

    /// Ambil buffer dan konsumsi stream
    pub fn into_inner(self) -> Result<Vec<u8>> {
        self.storage.map(Storage::into_vec).ok_or(Error::Closed)
    }
}

impl From<Vec<u8>> for Stream {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for Stream {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&str> for Stream {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl Add for &Stream {
    type Output = Result<Stream>;

    fn add(self, other: &Stream) -> Result<Stream> {
        self.concat(other)
    }
}

impl io::Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let chunk = self.live_mut()?.read(buf.len());
        let n = chunk.len();
        buf[..n].copy_from_slice(chunk);
        Ok(n)
    }
}

impl io::Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.live_mut()?.write(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Stream::flush(self)?;
        Ok(())
    }
}

impl io::Seek for Stream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let pos = Stream::seek(self, pos)?;
        Ok(pos as u64)
    }
}
