//! Single-block AES with the FIPS-197 round structure.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and round constants.
//! - Key schedule expansion for AES-128, AES-192 and AES-256.
//! - The four round transformations and their inverses.
//! - Single-block encryption and decryption, with input-length validation.
//!
//! **Not interoperable with standard AES.** The substitution table in
//! [`sbox`] is a fixed non-standard permutation, reproduced bit-exactly.
//! Everything else follows FIPS-197, but ciphertexts will not match the
//! published FIPS-197 test vectors or any other AES implementation.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod field;
mod key;
mod round;
pub mod sbox;
mod variant;

pub use crate::block::{block_from_slice, Block, State, BLOCK_SIZE};
pub use crate::cipher::{decode_block, decrypt_block, encode_block, encrypt_block, Aes};
pub use crate::error::{Error, Result};
pub use crate::field::{gf_mult, rcon, xtime};
pub use crate::key::{expand_key, KeySchedule};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::variant::{Variant, MAX_SCHEDULE_WORDS, NB};
