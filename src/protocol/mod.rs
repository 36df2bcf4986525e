//! Protocol Layer: Endian-Aware Binary Encoding
//!
//! Prinsip desain:
//! - Pure functions: pack/unpack tidak menyentuh stream
//! - Fixed-width: 1/2/4 byte integer, 4/8 byte IEEE-754 float
//! - Overflow-checked: value yang tidak muat ditolak sebelum encode

mod byte_order;
pub mod codec;

pub use byte_order::ByteOrder;
pub use codec::{pack_int, pack_uint, unpack_int, unpack_uint};
