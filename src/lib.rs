//! bytestream - Seekable Byte-Stream Codec
//!
//! Arsitektur:
//! - Storage: growable buffer + satu cursor untuk read dan write
//! - Protocol: pack/unpack integer dan float, endian-aware, overflow-checked
//! - Stream: kontrak file-like (seek/peek/read/write/truncate/close) + typed I/O
//!
//! ```
//! use bytestream::{ByteOrder, Stream};
//! use std::io::SeekFrom;
//!
//! let mut stream = Stream::new();
//! stream.set_byte_order(ByteOrder::Big);
//! stream.write_ulong(4_294_967_295)?;
//! stream.seek(SeekFrom::Start(0))?;
//! assert_eq!(stream.read_ulong()?, 4_294_967_295);
//! # Ok::<(), bytestream::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod hexdump;
pub mod protocol;
pub mod stream;

pub use crate::core::MappedFile;
pub use config::StreamOptions;
pub use error::{Error, Result};
pub use hexdump::hexdump;
pub use protocol::ByteOrder;
pub use stream::{ByteSource, Lines, Stream};
