//! Round sequencing and single-block encryption/decryption.

use crate::block::{block_from_slice, Block, State};
use crate::error::Result;
use crate::key::{expand_key, KeySchedule};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::variant::Variant;

/// Encrypts a single block with a pre-expanded key schedule (FIPS-197 `Cipher`).
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let nr = schedule.variant().nr();
    let mut state = State::from_block(block);

    add_round_key(&mut state, schedule, 0);

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule, round);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule, nr);

    state.to_block()
}

/// Decrypts a single block with a pre-expanded key schedule (FIPS-197 `InvCipher`).
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let nr = schedule.variant().nr();
    let mut state = State::from_block(block);

    add_round_key(&mut state, schedule, nr);
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule, round);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule, 0);

    state.to_block()
}

/// Encrypts one 16-byte block under `key`, expanding a fresh schedule.
///
/// Both lengths are validated before any round runs.
pub fn encode_block(variant: Variant, plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let schedule = expand_key(variant, key)?;
    let block = block_from_slice(plaintext)?;
    Ok(encrypt_block(&block, &schedule))
}

/// Decrypts one 16-byte block under `key`, expanding a fresh schedule.
pub fn decode_block(variant: Variant, ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let schedule = expand_key(variant, key)?;
    let block = block_from_slice(ciphertext)?;
    Ok(decrypt_block(&block, &schedule))
}

/// A key expanded once and reused across blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Expands `key` for `variant`.
    pub fn new(variant: Variant, key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: expand_key(variant, key)?,
        })
    }

    /// Infers the variant from the key length.
    pub fn from_key(key: &[u8]) -> Result<Self> {
        Self::new(Variant::from_key_len(key.len())?, key)
    }

    /// Variant this cipher was keyed for.
    pub fn variant(&self) -> Variant {
        self.schedule.variant()
    }

    /// Underlying key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.schedule)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.schedule)
    }

    /// Encrypts a slice that must be exactly one block long.
    pub fn encrypt_slice(&self, bytes: &[u8]) -> Result<Block> {
        Ok(self.encrypt_block(&block_from_slice(bytes)?))
    }

    /// Decrypts a slice that must be exactly one block long.
    pub fn decrypt_slice(&self, bytes: &[u8]) -> Result<Block> {
        Ok(self.decrypt_block(&block_from_slice(bytes)?))
    }
}
