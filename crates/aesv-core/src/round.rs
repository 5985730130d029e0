//! AES round transformations over [`State`].

use crate::block::State;
use crate::field::gf_mult;
use crate::key::KeySchedule;
use crate::sbox::{inv_sub_byte, sub_byte};
use crate::variant::NB;

/// Row 0 of the MixColumns circulant matrix.
const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];

/// Row 0 of the InvMixColumns circulant matrix.
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sub_byte(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sub_byte(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_left(r);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_right(r);
    }
}

/// Multiplies one column by the circulant matrix whose first row is `coeffs`.
fn mix_single_column(col: [u8; 4], coeffs: &[u8; 4]) -> [u8; 4] {
    core::array::from_fn(|row| {
        (0..4).fold(0u8, |acc, k| acc ^ gf_mult(coeffs[(4 + k - row) % 4], col[k]))
    })
}

/// MixColumns over all columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for c in 0..NB {
        let mixed = mix_single_column(state.column(c), &MIX);
        state.set_column(c, mixed);
    }
}

/// Inverse MixColumns over all columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for c in 0..NB {
        let mixed = mix_single_column(state.column(c), &INV_MIX);
        state.set_column(c, mixed);
    }
}

/// XORs the round key for `round` into the state.
///
/// Word `round * Nb + c` goes into column `c`, most significant byte at row 0.
#[inline]
pub fn add_round_key(state: &mut State, schedule: &KeySchedule, round: usize) {
    for (c, word) in schedule.round_key(round).iter().enumerate() {
        let key_col = word.to_be_bytes();
        let mut col = state.column(c);
        for (s, k) in col.iter_mut().zip(key_col) {
            *s ^= k;
        }
        state.set_column(c, col);
    }
}
