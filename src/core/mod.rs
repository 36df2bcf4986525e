//! Core module: Byte storage untuk stream
//!
//! Prinsip desain:
//! - Single owner: Stream memiliki buffer sepenuhnya
//! - Single cursor: read dan write berbagi satu posisi
//! - Geometric growth: `Vec` yang tumbuh sesuai kebutuhan

mod mmap_storage;
mod storage;

pub use mmap_storage::MappedFile;
pub use storage::{Storage, DEFAULT_CAPACITY};
