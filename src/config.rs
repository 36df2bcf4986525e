//! Stream configuration
//!
//! Opsi yang dipakai saat membangun [`Stream`](crate::Stream).

use crate::core::DEFAULT_CAPACITY;
use crate::protocol::ByteOrder;

/// Opsi konstruksi stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamOptions {
    /// Byte order awal untuk typed read/write
    pub byte_order: ByteOrder,
    /// Kapasitas awal buffer
    pub initial_capacity: usize,
    /// Kembalikan cursor ke 0 setelah menyalin source
    pub rewind: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Network,
            initial_capacity: DEFAULT_CAPACITY,
            rewind: true,
        }
    }
}

impl StreamOptions {
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Jika `false`, cursor dibiarkan di akhir data yang disalin
    pub fn rewind(mut self, rewind: bool) -> Self {
        self.rewind = rewind;
        self
    }
}
