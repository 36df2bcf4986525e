//! Hexdump untuk debugging isi buffer
//!
//! Format per baris (16 bytes):
//! `0010:  xx xx xx xx xx xx xx xx  xx xx xx xx xx xx xx xx  ascii...`

use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;
const HALF: usize = BYTES_PER_LINE / 2;

/// Printable non-whitespace ASCII ditampilkan apa adanya, sisanya `.`
#[inline(always)]
fn ascii_char(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        byte as char
    } else {
        '.'
    }
}

fn hex_column(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        // write! ke String tidak pernah gagal
        let _ = write!(out, "{:02x} ", byte);
    }
    out
}

/// Representasi heksadesimal dari `data`
pub fn hexdump(data: &[u8]) -> String {
    hexdump_from(data, 0)
}

/// Seperti [`hexdump`], tapi kolom offset dimulai dari `base`
pub fn hexdump_from(data: &[u8], base: usize) -> String {
    let mut out = String::new();

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let (left, right) = chunk.split_at(chunk.len().min(HALF));
        let ascii: String = chunk.iter().map(|&b| ascii_char(b)).collect();

        let _ = writeln!(
            out,
            "{:04x}:  {:<24} {:<24} {}",
            base + line * BYTES_PER_LINE,
            hex_column(left),
            hex_column(right),
            ascii
        );
    }

    out
}
