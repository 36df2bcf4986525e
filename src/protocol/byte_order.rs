//! Byte order selector untuk pack/unpack.
//!
//! `Network` identik dengan `Big` untuk semua perpindahan data.
//! `Native` selalu mengikuti byte order host, baik saat pack maupun unpack.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Urutan byte untuk integer dan float
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    /// Byte order host (`@`)
    Native,
    /// Least-significant byte first (`<`)
    Little,
    /// Most-significant byte first (`>`)
    Big,
    /// Network order, sama dengan `Big` (`!`)
    #[default]
    Network,
}

impl ByteOrder {
    /// True jika byte pertama di wire adalah most-significant byte.
    #[inline(always)]
    pub const fn is_big_endian(self) -> bool {
        match self {
            ByteOrder::Big | ByteOrder::Network => true,
            ByteOrder::Little => false,
            ByteOrder::Native => cfg!(target_endian = "big"),
        }
    }

    /// Format character, sama seperti konvensi `struct` format strings.
    pub const fn as_char(self) -> char {
        match self {
            ByteOrder::Native => '@',
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
            ByteOrder::Network => '!',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(Self::Native),
            '<' => Some(Self::Little),
            '>' => Some(Self::Big),
            '!' => Some(Self::Network),
            _ => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteOrder::Native => "native",
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
            ByteOrder::Network => "network",
        };
        f.write_str(name)
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(order) = Self::from_char(c) {
                return Ok(order);
            }
        }

        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            "network" => Ok(Self::Network),
            _ => Err(Error::TypeMismatch("unknown byte order")),
        }
    }
}
