//! Stream Contract Test
//!
//! Verifikasi kontrak stream dari sisi user library: round-trip codec,
//! peek/read, EOF vs short read, concatenation, dan lifecycle close.
//!
//! Usage:
//!   cargo test --test stream_contract

use std::io::SeekFrom;

use bytestream::protocol::{pack_int, pack_uint, unpack_int, unpack_uint};
use bytestream::{ByteOrder, Error, Stream};

const ORDERS: [ByteOrder; 4] = [
    ByteOrder::Native,
    ByteOrder::Little,
    ByteOrder::Big,
    ByteOrder::Network,
];

/// Deterministic pseudo-random generator (LCG), sama seperti stress test lama
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    *seed >> 16
}

#[test]
fn test_roundtrip_law_all_widths_and_orders() {
    let mut seed = 42u64;

    for order in ORDERS {
        for width in [1usize, 2, 4] {
            let bits = 8 * width;
            for _ in 0..500 {
                let raw = lcg(&mut seed);

                let unsigned = raw & ((1u64 << bits) - 1);
                let mut buf = [0u8; 4];
                pack_uint(unsigned, order, &mut buf[..width]).unwrap();
                assert_eq!(unpack_uint(&buf[..width], order).unwrap(), unsigned);

                let signed = ((unsigned << (64 - bits)) as i64) >> (64 - bits);
                pack_int(signed, order, &mut buf[..width]).unwrap();
                assert_eq!(unpack_int(&buf[..width], order).unwrap(), signed);
            }
        }
    }
}

#[test]
fn test_overflow_iff_out_of_range() {
    for width in [1usize, 2, 4] {
        let bits = 8 * width;
        let mut buf = [0u8; 4];
        let out = &mut buf[..width];

        let limit = 1u64 << bits;
        assert!(pack_uint(limit - 1, ByteOrder::Big, out).is_ok());
        assert!(pack_uint(limit, ByteOrder::Big, out).unwrap_err().is_overflow());
        assert!(pack_uint(u64::MAX, ByteOrder::Big, out).is_err());

        let half = 1i64 << (bits - 1);
        assert!(pack_int(half - 1, ByteOrder::Little, out).is_ok());
        assert!(pack_int(-half, ByteOrder::Little, out).is_ok());
        assert!(pack_int(half, ByteOrder::Little, out).unwrap_err().is_overflow());
        assert!(pack_int(-half - 1, ByteOrder::Little, out).unwrap_err().is_overflow());
    }
}

#[test]
fn test_peek_then_read() {
    let mut stream = Stream::from_bytes(b"peek-then-read".to_vec());
    stream.seek(SeekFrom::Start(5)).unwrap();

    for k in [0usize, 1, 4, 9, 20] {
        let before = stream.tell().unwrap();
        let peeked = stream.peek(k).unwrap().to_vec();
        assert_eq!(stream.tell().unwrap(), before);

        if k <= stream.remaining().unwrap() {
            assert_eq!(stream.read(k).unwrap(), peeked.as_slice());
            stream.seek(SeekFrom::Start(before as u64)).unwrap();
        } else {
            assert_eq!(peeked.len(), stream.remaining().unwrap());
        }
    }
}

#[test]
fn test_remaining_and_eof_invariants() {
    let mut stream = Stream::new();
    stream.write(b"0123456789").unwrap();

    for pos in 0..=10u64 {
        stream.seek(SeekFrom::Start(pos)).unwrap();
        let remaining = stream.remaining().unwrap();
        assert_eq!(remaining, stream.length().unwrap() - stream.tell().unwrap());
        assert_eq!(stream.at_eof().unwrap(), remaining == 0);
    }
}

#[test]
fn test_concatenation_law() {
    let mut a = Stream::from_bytes(b"first-".to_vec());
    let mut b = Stream::from_bytes(b"second".to_vec());
    a.seek(SeekFrom::Start(3)).unwrap();
    b.seek(SeekFrom::End(0)).unwrap();

    let c = (&a + &b).unwrap();
    assert_eq!(c.getvalue().unwrap(), b"first-second");
    assert_eq!(c.tell().unwrap(), 0);
    assert_eq!(a.tell().unwrap(), 3);
    assert_eq!(b.tell().unwrap(), 6);
}

#[test]
fn test_write_seek_read_boundary_lengths() {
    for len in [0usize, 1, 255, 65535] {
        let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();

        let mut stream = Stream::new();
        stream.write(&data).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();

        assert_eq!(stream.read(len).unwrap(), data.as_slice());
        assert!(stream.at_eof().unwrap());
    }
}

#[test]
fn test_eof_and_short_read() {
    let mut empty = Stream::new();
    assert!(matches!(
        empty.read(1),
        Err(Error::EndOfStream { requested: 1 })
    ));

    let mut stream = Stream::from_bytes(vec![1, 2, 3]);
    let err = stream.read(4).unwrap_err();
    assert!(err.is_short_read());
    assert_eq!(stream.tell().unwrap(), 0);
}

#[test]
fn test_ulong_scenario() {
    let mut stream = Stream::new();
    stream.set_byte_order(ByteOrder::Big);
    stream.write_ulong(4_294_967_295).unwrap();
    assert_eq!(stream.getvalue().unwrap(), &[0xFF, 0xFF, 0xFF, 0xFF]);

    stream.seek(SeekFrom::Start(0)).unwrap();
    assert_eq!(stream.read_ulong().unwrap(), 4_294_967_295);
}

#[test]
fn test_short_scenario() {
    let mut stream = Stream::new();
    stream.set_byte_order(ByteOrder::Big);
    stream.write_short(-1).unwrap();
    assert_eq!(stream.getvalue().unwrap(), &[0xFF, 0xFF]);

    stream.seek(SeekFrom::Start(0)).unwrap();
    assert_eq!(stream.read_short().unwrap(), -1);
}

#[test]
fn test_utf8_scenario() {
    let mut stream = Stream::new();
    stream.write_utf8_string("héllo").unwrap();
    stream.seek(SeekFrom::Start(0)).unwrap();
    assert_eq!(stream.read_utf8_string("héllo".len()).unwrap(), "héllo");

    // Potong di tengah multi-byte sequence
    let mut stream = Stream::new();
    stream.write_utf8_string("hé").unwrap();
    stream.seek(SeekFrom::Start(0)).unwrap();
    assert!(matches!(
        stream.read_utf8_string("hé".len() - 1),
        Err(Error::Decode(_))
    ));
}

#[test]
fn test_closed_lifecycle() {
    let mut stream = Stream::from_bytes(b"bye".to_vec());
    stream.close();

    assert!(stream.tell().unwrap_err().is_closed());
    assert!(stream.length().unwrap_err().is_closed());
    assert!(stream.remaining().unwrap_err().is_closed());
    assert!(stream.at_eof().unwrap_err().is_closed());
    assert!(stream.seek(SeekFrom::Start(0)).unwrap_err().is_closed());
    assert!(stream.peek(1).unwrap_err().is_closed());
    assert!(stream.read_all().unwrap_err().is_closed());
    assert!(stream.readline().unwrap_err().is_closed());
    assert!(stream.readlines(0).unwrap_err().is_closed());
    assert!(stream.getvalue().unwrap_err().is_closed());
    assert!(stream.truncate(0).unwrap_err().is_closed());
    assert!(stream.flush().unwrap_err().is_closed());
    assert!(stream.write_double(1.0).unwrap_err().is_closed());
    assert!(stream.hexdump().unwrap_err().is_closed());

    // Close kedua tidak error
    stream.close();
    assert!(stream.is_closed());
}

#[test]
fn test_mixed_record_decode() {
    // Record: [u8 tag][u16 len][utf8 name][f64 value][i32 delta]
    let mut stream = Stream::new();
    stream.write_uchar(0x0A).unwrap();
    stream.write_ushort("sensor".len() as u64).unwrap();
    stream.write_utf8_string("sensor").unwrap();
    stream.write_double(21.5).unwrap();
    stream.write_long(-300).unwrap();

    let mut reader = Stream::from_stream(&stream).unwrap();
    assert_eq!(reader.read_uchar().unwrap(), 0x0A);
    let len = reader.read_ushort().unwrap() as usize;
    assert_eq!(reader.read_utf8_string(len).unwrap(), "sensor");
    assert_eq!(reader.read_double().unwrap(), 21.5);
    assert_eq!(reader.read_long().unwrap(), -300);
    assert!(reader.at_eof().unwrap());
}

#[test]
fn test_mapped_file_source() {
    let path = "test_contract_mapped.dat";
    std::fs::write(path, [0x00, 0x00, 0x01, 0x00, b'\n', b'x']).unwrap();

    {
        let mut mapped = bytestream::MappedFile::open(path).unwrap();
        let mut stream = Stream::from_source(&mut mapped).unwrap();
        assert_eq!(stream.read_ulong().unwrap(), 256);
        assert_eq!(stream.readlines(0).unwrap(), vec![&b"\n"[..], &b"x"[..]]);
    }

    std::fs::remove_file(path).ok();
}
