//! Growable Byte Storage dengan satu cursor
//!
//! Satu buffer, satu posisi yang dipakai bersama untuk read dan write
//! (file-like, bukan cursor read/write terpisah).
//!
//! Invariant: `pos <= buf.len()` setiap saat.

/// Kapasitas awal untuk amortisasi growth
pub const DEFAULT_CAPACITY: usize = 128;

/// Owned byte buffer + cursor
#[derive(Debug, Clone, Default)]
pub struct Storage {
    buf: Vec<u8>,
    pos: usize,
}

impl Storage {
    /// Membuat storage kosong dengan kapasitas awal tertentu
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Ambil alih `Vec` yang sudah ada, cursor di 0
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Pindahkan cursor. Caller wajib menjamin `pos <= len()`.
    #[inline(always)]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.buf.len(), "cursor past end of storage");
        self.pos = pos.min(self.buf.len());
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Overwrite/append `data` di posisi cursor, lalu majukan cursor.
    ///
    /// Returns offset dimana data ditulis.
    #[inline(always)]
    pub fn write(&mut self, data: &[u8]) -> usize {
        let start = self.pos;
        let overlap = (self.buf.len() - start).min(data.len());

        self.buf[start..start + overlap].copy_from_slice(&data[..overlap]);
        self.buf.extend_from_slice(&data[overlap..]);

        self.pos = start + data.len();
        start
    }

    /// Baca sampai `n` bytes dari cursor (lebih sedikit hanya di akhir buffer)
    #[inline(always)]
    pub fn read(&mut self, n: usize) -> &[u8] {
        let start = self.pos;
        let end = start + n.min(self.remaining());
        self.pos = end;
        &self.buf[start..end]
    }

    /// Seperti `read` tapi cursor tidak bergerak
    #[inline(always)]
    pub fn peek(&self, n: usize) -> &[u8] {
        let end = self.pos + n.min(self.remaining());
        &self.buf[self.pos..end]
    }

    /// Semua bytes dari cursor sampai akhir
    #[inline(always)]
    pub fn tail(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Seluruh isi buffer, tidak peduli posisi cursor
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Potong buffer ke `size` bytes; cursor di-clamp ke panjang baru
    pub fn truncate(&mut self, size: usize) {
        self.buf.truncate(size);
        self.pos = self.pos.min(self.buf.len());
    }

    /// Split borrow: isi buffer (read-only) + cursor (mutable)
    ///
    /// Dipakai iterator baris agar slice yang dikembalikan bisa hidup
    /// selama borrow stream.
    #[inline(always)]
    pub(crate) fn split_cursor(&mut self) -> (&[u8], &mut usize) {
        (&self.buf, &mut self.pos)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}
