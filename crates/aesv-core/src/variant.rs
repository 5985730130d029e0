//! Key-size variants and their round parameters.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Number of 32-bit columns in the state. Fixed at 4 for every variant.
pub const NB: usize = 4;

/// Largest key schedule of any variant (AES-256: `4 * (14 + 1)` words).
pub const MAX_SCHEDULE_WORDS: usize = NB * (14 + 1);

/// AES key-size variant, carrying `Nk` and `Nr`.
///
/// | variant | Nk | Nr |
/// |---------|----|----|
/// | AES-128 |  4 | 10 |
/// | AES-192 |  6 | 12 |
/// | AES-256 |  8 | 14 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 128-bit key, 10 rounds.
    #[default]
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl Variant {
    /// All variants, smallest key first.
    pub const ALL: [Variant; 3] = [Variant::Aes128, Variant::Aes192, Variant::Aes256];

    /// Key length in 32-bit words (`Nk`).
    #[inline]
    pub const fn nk(self) -> usize {
        match self {
            Variant::Aes128 => 4,
            Variant::Aes192 => 6,
            Variant::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub const fn nr(self) -> usize {
        match self {
            Variant::Aes128 => 10,
            Variant::Aes192 => 12,
            Variant::Aes256 => 14,
        }
    }

    /// Key length in bytes.
    #[inline]
    pub const fn key_len(self) -> usize {
        4 * self.nk()
    }

    /// Number of words in the expanded key schedule, `Nb * (Nr + 1)`.
    #[inline]
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }

    /// Picks the variant whose key length is `len` bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.key_len() == len)
            .ok_or(Error::UnsupportedKeyLength { actual: len })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Aes128 => "AES-128",
            Variant::Aes192 => "AES-192",
            Variant::Aes256 => "AES-256",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "aes128" | "128" => Ok(Variant::Aes128),
            "aes192" | "192" => Ok(Variant::Aes192),
            "aes256" | "256" => Ok(Variant::Aes256),
            _ => Err(Error::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}
