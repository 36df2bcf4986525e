//! Error types untuk operasi stream dan codec.
//!
//! Setiap error langsung dikembalikan ke caller, tidak ada retry internal.
//! Read yang gagal tidak menggeser posisi, write yang gagal tidak mengubah buffer.

use std::io;
use thiserror::Error;

/// Result type untuk semua operasi stream.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while moving bytes through a [`Stream`](crate::Stream).
#[derive(Error, Debug)]
pub enum Error {
    /// Operasi dilakukan setelah `close()`.
    #[error("buffer is closed")]
    Closed,

    /// Read butuh minimal 1 byte tapi tidak ada byte tersisa.
    #[error("end of stream: tried to read {requested} byte(s)")]
    EndOfStream { requested: usize },

    /// Read butuh `requested` bytes tapi hanya `available` (> 0) yang ada.
    ///
    /// Dibedakan dari [`Error::EndOfStream`]: ini menandakan record yang
    /// terpotong, bukan akhir stream yang bersih.
    #[error("short read: wanted {requested} byte(s), only {available} available")]
    ShortRead { requested: usize, available: usize },

    /// Integer tidak muat di field dengan lebar `width` bytes.
    #[error("integer {value} out of range for {width}-byte field")]
    Overflow { value: i128, width: usize },

    /// Byte sequence bukan UTF-8 yang valid.
    #[error("invalid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Operand dengan tipe yang salah.
    #[error("type mismatch: {0}")]
    TypeMismatch(&'static str),

    /// Target seek di luar `0..=length`.
    #[error("invalid seek target {target} (length {length})")]
    InvalidSeek { target: i128, length: usize },

    /// Lebar integer atau kode whence yang tidak didukung.
    #[error("unsupported width or whence: {0}")]
    InvalidWidth(usize),

    /// I/O error dari source file-like atau mmap.
    #[error("source I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true for a clean end of stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::EndOfStream { .. })
    }

    /// Returns true for a torn read (some, but not enough, bytes left).
    pub fn is_short_read(&self) -> bool {
        matches!(self, Error::ShortRead { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Error::Closed)
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::Closed => io::ErrorKind::NotConnected,
            Error::EndOfStream { .. } | Error::ShortRead { .. } => io::ErrorKind::UnexpectedEof,
            Error::Overflow { .. } | Error::InvalidSeek { .. } | Error::InvalidWidth(_) => {
                io::ErrorKind::InvalidInput
            }
            Error::Decode(_) | Error::TypeMismatch(_) => io::ErrorKind::InvalidData,
            Error::Io(inner) => inner.kind(),
        };
        match err {
            Error::Io(inner) => inner,
            other => io::Error::new(kind, other),
        }
    }
}
