//! Key schedule expansion.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::field::rcon;
use crate::sbox::{rot_word, sub_word};
use crate::variant::{Variant, MAX_SCHEDULE_WORDS, NB};

/// Expanded key schedule: `Nb * (Nr + 1)` round-key words.
///
/// Each word holds four round-key bytes, most significant byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    variant: Variant,
    words: [u32; MAX_SCHEDULE_WORDS],
}

impl KeySchedule {
    /// Variant the schedule was expanded for.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// All schedule words, `Nb * (Nr + 1)` of them.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.variant.schedule_len()]
    }

    /// The `Nb` words combined with the state in `round` (0..=Nr).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32] {
        &self.words()[round * NB..(round + 1) * NB]
    }
}

/// Expands `key` into the schedule for `variant`.
///
/// Fails with [`Error::InvalidKeyLength`] unless `key` is exactly
/// `variant.key_len()` bytes.
pub fn expand_key(variant: Variant, key: &[u8]) -> Result<KeySchedule> {
    if key.len() != variant.key_len() {
        debug!(%variant, len = key.len(), "rejecting key of wrong length");
        return Err(Error::InvalidKeyLength {
            variant,
            expected: variant.key_len(),
            actual: key.len(),
        });
    }

    let nk = variant.nk();
    let mut w = [0u32; MAX_SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..variant.schedule_len() {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ rcon((i / nk) as u32);
        } else if variant == Variant::Aes256 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    trace!(%variant, words = variant.schedule_len(), "expanded key schedule");
    Ok(KeySchedule { variant, words: w })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn first_words_are_big_endian_key() {
        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let schedule = expand_key(Variant::Aes128, &key).expect("valid key");
        assert_eq!(
            schedule.round_key(0),
            &[0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]
        );
    }

    #[test]
    fn aes128_schedule_words() {
        let schedule = expand_key(Variant::Aes128, &[0u8; 16]).expect("valid key");
        let words = schedule.words();
        assert_eq!(words.len(), 44);
        assert_eq!(words[4], 0x75747474);
        assert_eq!(words[5], 0x75747474);
        assert_eq!(words[43], 0x26399e32);

        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let schedule = expand_key(Variant::Aes128, &key).expect("valid key");
        assert_eq!(schedule.words()[4], 0x175b5a93);
        assert_eq!(schedule.words()[43], 0xd48f35a9);
    }

    #[test]
    fn aes192_schedule_words() {
        let key = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        let schedule = expand_key(Variant::Aes192, &key).expect("valid key");
        assert_eq!(schedule.words().len(), 52);
        assert_eq!(schedule.words()[6], 0x6804cb1b);
        assert_eq!(schedule.words()[51], 0xbd4f7341);
    }

    #[test]
    fn aes256_schedule_words() {
        let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let schedule = expand_key(Variant::Aes256, &key).expect("valid key");
        assert_eq!(schedule.words().len(), 60);
        assert_eq!(schedule.words()[8], 0x5546366c);
        assert_eq!(schedule.words()[59], 0xa89fa777);
        assert_eq!(schedule.round_key(14), &schedule.words()[56..60]);
    }

    #[test]
    fn aes256_midpoint_substitution() {
        let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let schedule = expand_key(Variant::Aes256, &key).expect("valid key");
        let w = schedule.words();
        assert_eq!(w[12], w[4] ^ sub_word(w[11]));
        assert_eq!(w[13], w[5] ^ w[12]);
    }

    #[test]
    fn rejects_wrong_key_length() {
        for len in [0usize, 15, 17, 24, 32] {
            let key = vec![0u8; len];
            assert_eq!(
                expand_key(Variant::Aes128, &key),
                Err(Error::InvalidKeyLength {
                    variant: Variant::Aes128,
                    expected: 16,
                    actual: len,
                })
            );
        }
        assert!(expand_key(Variant::Aes256, &[0u8; 16]).is_err());
    }
}
