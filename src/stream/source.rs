//! Byte sources untuk konstruksi stream
//!
//! Empat kasus saja:
//! 1. Stream lain: seluruh isi buffer disalin, posisi source tidak berubah
//! 2. Raw bytes: disalin verbatim
//! 3. Whole-buffer accessor: seluruh isi diambil sekaligus
//! 4. Readable/seekable/tellable: simpan posisi, seek 0, baca semua, kembalikan posisi

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

use super::Stream;
use crate::config::StreamOptions;
use crate::core::{MappedFile, Storage};
use crate::error::{Error, Result};

/// Read + Seek dalam satu trait object
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Source yang bisa disalin ke stream baru.
///
/// Capability dicek saat runtime: whole-buffer accessor duluan, lalu
/// file-like. Source tanpa keduanya ditolak dengan [`Error::TypeMismatch`].
pub trait ByteSource {
    /// Seluruh isi source sebagai satu slice, jika tersedia
    fn whole_buffer(&self) -> Option<&[u8]> {
        None
    }

    /// Akses read/seek/tell, jika tersedia
    fn file_like(&mut self) -> Option<&mut dyn ReadSeek> {
        None
    }

    /// Source yang sudah ditutup tidak bisa disalin
    fn is_closed(&self) -> bool {
        false
    }
}

impl ByteSource for [u8] {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Vec<u8> {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for str {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl ByteSource for String {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self.get_ref().as_ref())
    }
}

impl ByteSource for MappedFile {
    fn whole_buffer(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl ByteSource for File {
    fn file_like(&mut self) -> Option<&mut dyn ReadSeek> {
        Some(self)
    }
}

impl ByteSource for Stream {
    fn whole_buffer(&self) -> Option<&[u8]> {
        self.storage.as_ref().map(Storage::as_bytes)
    }

    fn is_closed(&self) -> bool {
        Stream::is_closed(self)
    }
}

/// Salin seluruh isi reader dari offset 0, lalu kembalikan posisinya.
///
/// Posisi tetap dikembalikan walaupun read gagal.
fn copy_rewound<R: Read + Seek + ?Sized>(reader: &mut R, out: &mut Vec<u8>) -> io::Result<usize> {
    let old_pos = reader.stream_position()?;
    reader.seek(SeekFrom::Start(0))?;

    let copied = reader.read_to_end(out);
    let restored = reader.seek(SeekFrom::Start(old_pos));

    let n = copied?;
    restored?;
    Ok(n)
}

impl Stream {
    fn filled(data: Vec<u8>, options: StreamOptions) -> Self {
        let mut storage = Storage::from_vec(data);
        if !options.rewind {
            storage.set_position(storage.len());
        }
        Stream {
            storage: Some(storage),
            byte_order: options.byte_order,
        }
    }

    /// Salin seluruh buffer stream lain (bukan hanya dari posisinya).
    ///
    /// Byte order ikut dari source, posisi source tidak berubah.
    pub fn from_stream(other: &Stream) -> Result<Self> {
        let options = StreamOptions::default().byte_order(other.byte_order);
        Ok(Self::filled(other.getvalue()?.to_vec(), options))
    }

    /// Salin dari objek readable/seekable/tellable
    pub fn from_reader<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<Self> {
        Self::from_reader_with(reader, StreamOptions::default())
    }

    pub fn from_reader_with<R: Read + Seek + ?Sized>(
        reader: &mut R,
        options: StreamOptions,
    ) -> Result<Self> {
        let mut data = Vec::with_capacity(options.initial_capacity);
        let n = copy_rewound(reader, &mut data)?;
        tracing::debug!(bytes = n, "stream built from reader");
        Ok(Self::filled(data, options))
    }

    /// Salin dari source apa pun yang punya salah satu capability
    pub fn from_source<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        Self::from_source_with(source, StreamOptions::default())
    }

    pub fn from_source_with<S: ByteSource + ?Sized>(
        source: &mut S,
        options: StreamOptions,
    ) -> Result<Self> {
        if source.is_closed() {
            return Err(Error::Closed);
        }

        if let Some(buf) = source.whole_buffer() {
            tracing::debug!(bytes = buf.len(), "stream built from whole buffer");
            return Ok(Self::filled(buf.to_vec(), options));
        }

        match source.file_like() {
            Some(reader) => Self::from_reader_with(reader, options),
            None => Err(Error::TypeMismatch("unable to coerce source into a stream")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ByteOrder;

    struct Opaque;

    impl ByteSource for Opaque {}

    /// Reader yang hanya bisa read + seek, tanpa whole-buffer accessor
    struct Tape(Cursor<Vec<u8>>);

    impl ByteSource for Tape {
        fn file_like(&mut self) -> Option<&mut dyn ReadSeek> {
            Some(&mut self.0)
        }
    }

    #[test]
    fn test_from_stream_copies_everything() {
        let mut source = Stream::from_bytes(b"full buffer".to_vec());
        source.set_byte_order(ByteOrder::Little);
        source.seek(SeekFrom::Start(5)).unwrap();

        let copy = Stream::from_stream(&source).unwrap();
        assert_eq!(copy.getvalue().unwrap(), b"full buffer");
        assert_eq!(copy.tell().unwrap(), 0);
        assert_eq!(copy.byte_order(), ByteOrder::Little);
        assert_eq!(source.tell().unwrap(), 5);
    }

    #[test]
    fn test_from_reader_restores_position() {
        let mut cursor = Cursor::new(b"file-like data".to_vec());
        cursor.set_position(9);

        let stream = Stream::from_reader(&mut cursor).unwrap();
        assert_eq!(stream.getvalue().unwrap(), b"file-like data");
        assert_eq!(stream.tell().unwrap(), 0);
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn test_file_like_capability() {
        let mut tape = Tape(Cursor::new(vec![1, 2, 3, 4]));
        tape.0.set_position(3);

        let stream = Stream::from_source(&mut tape).unwrap();
        assert_eq!(stream.getvalue().unwrap(), &[1, 2, 3, 4]);
        assert_eq!(tape.0.position(), 3);
    }

    #[test]
    fn test_no_rewind_leaves_cursor_at_end() {
        let options = StreamOptions::default().rewind(false);
        let stream = Stream::from_source_with(&mut b"abc".to_vec(), options).unwrap();

        assert_eq!(stream.tell().unwrap(), 3);
        assert!(stream.at_eof().unwrap());
    }

    #[test]
    fn test_raw_and_text_sources() {
        let stream = Stream::from_source(&mut String::from("teks")).unwrap();
        assert_eq!(stream.getvalue().unwrap(), b"teks");

        let raw: &mut [u8] = &mut [9, 8, 7];
        let stream = Stream::from_source(raw).unwrap();
        assert_eq!(stream.getvalue().unwrap(), &[9, 8, 7]);
    }

    #[test]
    fn test_unsupported_source() {
        assert!(matches!(
            Stream::from_source(&mut Opaque),
            Err(Error::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_closed_stream_source() {
        let mut closed = Stream::new();
        closed.close();

        assert!(Stream::from_source(&mut closed).unwrap_err().is_closed());
        assert!(Stream::from_stream(&closed).unwrap_err().is_closed());
    }
}
