//! Memory-Mapped File sebagai Byte Source
//!
//! File di-mmap read-only, memungkinkan:
//! - Zero-copy read: Data langsung dari page cache
//! - Whole-buffer access: seluruh isi file tersedia sebagai satu slice
//!
//! Dipakai sebagai source "whole-buffer accessor" saat membangun stream.

use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io;
use std::path::Path;

/// Read-only mmap dari sebuah file
pub struct MappedFile {
    // File kosong tidak bisa di-mmap, jadi None
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Membuka dan mmap file
    ///
    /// # Arguments
    /// * `path` - Path ke file yang akan dibaca
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();

        if len == 0 {
            return Ok(Self { mmap: None });
        }

        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "file too large to map"))?;

        // SAFETY: Mapping read-only. File tidak boleh di-truncate proses lain
        // selama MappedFile hidup.
        let mmap = unsafe { MmapOptions::new().len(len).map(&file)? };

        tracing::debug!(path = %path.as_ref().display(), len, "mapped file");
        Ok(Self { mmap: Some(mmap) })
    }

    /// Seluruh isi file (zero-copy)
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membaca range dari file (zero-copy read via slice)
    ///
    /// Returns None jika range melewati akhir file.
    #[inline(always)]
    pub fn read(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.as_bytes().get(offset..end)
    }
}
