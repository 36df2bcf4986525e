//! Primitive codec: pack/unpack integer dan float dengan byte order tertentu.
//!
//! Semua fungsi di sini pure, tidak ada alokasi. Lebar integer diambil dari
//! panjang slice (1..=8 bytes); stream memakai 1, 2 dan 4.
//!
//! Aturan:
//! - Big/Network: most-significant byte duluan
//! - Little: least-significant byte duluan
//! - Native: byte order host, konsisten untuk pack dan unpack
//! - Signed: two's complement, sign-extend saat unpack

use super::byte_order::ByteOrder;
use crate::error::{Error, Result};

/// Lebar integer maksimum yang didukung codec
pub const MAX_WIDTH: usize = 8;

#[inline(always)]
fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidWidth(width));
    }
    Ok(())
}

/// Tulis `width` byte terendah dari `raw` ke `out` sesuai byte order.
#[inline(always)]
fn place(raw: u64, order: ByteOrder, out: &mut [u8]) {
    let width = out.len();
    if order.is_big_endian() {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (raw >> (8 * (width - 1 - i))) as u8;
        }
    } else {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (raw >> (8 * i)) as u8;
        }
    }
}

/// Gabungkan bytes menjadi unsigned value sesuai byte order.
#[inline(always)]
fn gather(bytes: &[u8], order: ByteOrder) -> u64 {
    if order.is_big_endian() {
        bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    } else {
        bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }
}

/// True jika `value` muat di unsigned field `width` bytes.
#[inline(always)]
pub fn uint_fits(value: u64, width: usize) -> bool {
    width >= MAX_WIDTH || value >> (8 * width) == 0
}

/// True jika `value` muat di signed field `width` bytes.
#[inline(always)]
pub fn int_fits(value: i64, width: usize) -> bool {
    if width >= MAX_WIDTH {
        return true;
    }
    let limit = 1i64 << (8 * width - 1);
    (-limit..limit).contains(&value)
}

/// Pack unsigned integer ke `out`; lebar field = `out.len()`.
///
/// Gagal dengan [`Error::Overflow`] jika `value >= 2^(8 * width)`.
/// Buffer tidak disentuh jika gagal.
pub fn pack_uint(value: u64, order: ByteOrder, out: &mut [u8]) -> Result<()> {
    let width = out.len();
    check_width(width)?;

    if !uint_fits(value, width) {
        return Err(Error::Overflow {
            value: i128::from(value),
            width,
        });
    }

    place(value, order, out);
    Ok(())
}

/// Unpack unsigned integer dari `bytes`; lebar field = `bytes.len()`.
pub fn unpack_uint(bytes: &[u8], order: ByteOrder) -> Result<u64> {
    check_width(bytes.len())?;
    Ok(gather(bytes, order))
}

/// Pack signed integer (two's complement) ke `out`.
///
/// Gagal dengan [`Error::Overflow`] jika `value` di luar
/// `[-2^(8 * width - 1), 2^(8 * width - 1))`.
pub fn pack_int(value: i64, order: ByteOrder, out: &mut [u8]) -> Result<()> {
    let width = out.len();
    check_width(width)?;

    if !int_fits(value, width) {
        return Err(Error::Overflow {
            value: i128::from(value),
            width,
        });
    }

    place(value as u64, order, out);
    Ok(())
}

/// Unpack signed integer, sign-extend dari bit tertinggi field.
pub fn unpack_int(bytes: &[u8], order: ByteOrder) -> Result<i64> {
    let width = bytes.len();
    check_width(width)?;

    let shift = 64 - 8 * width as u32;
    let raw = gather(bytes, order);
    Ok(((raw << shift) as i64) >> shift)
}

/// Encode IEEE-754 single precision.
#[inline(always)]
pub fn pack_f32(value: f32, order: ByteOrder) -> [u8; 4] {
    if order.is_big_endian() {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    }
}

#[inline(always)]
pub fn unpack_f32(bytes: [u8; 4], order: ByteOrder) -> f32 {
    if order.is_big_endian() {
        f32::from_be_bytes(bytes)
    } else {
        f32::from_le_bytes(bytes)
    }
}

/// Encode IEEE-754 double precision.
#[inline(always)]
pub fn pack_f64(value: f64, order: ByteOrder) -> [u8; 8] {
    if order.is_big_endian() {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    }
}

#[inline(always)]
pub fn unpack_f64(bytes: [u8; 8], order: ByteOrder) -> f64 {
    if order.is_big_endian() {
        f64::from_be_bytes(bytes)
    } else {
        f64::from_le_bytes(bytes)
    }
}
