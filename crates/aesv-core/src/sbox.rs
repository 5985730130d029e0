//! Byte substitution tables and the word helpers built on them.
//!
//! The tables are NOT the FIPS-197 S-box. They are a fixed alternative
//! permutation of `0..=255` with its exact inverse, so ciphertexts produced
//! here do not interoperate with standard AES.

/// Forward substitution table, row-major by high nibble.
#[rustfmt::skip]
pub const S_BOX: [u8; 256] = [
    0x74, 0xac, 0x59, 0xb9, 0xdb, 0x55, 0xba, 0xb4, 0x76, 0xc3, 0xfe, 0x91, 0x90, 0x16, 0x5a, 0x58,
    0x67, 0xe7, 0xb5, 0x3f, 0x18, 0x69, 0x05, 0xc9, 0xa0, 0xc2, 0x24, 0x0f, 0x6f, 0x54, 0x47, 0x34,
    0x77, 0x30, 0x0c, 0x9d, 0xee, 0xf2, 0xc1, 0xe2, 0x2f, 0xc4, 0x6a, 0x0b, 0x3e, 0xd6, 0xcc, 0x88,
    0x27, 0x94, 0x23, 0xc8, 0xf6, 0x35, 0x08, 0xa7, 0x73, 0x33, 0xbe, 0x9e, 0x4b, 0x5d, 0x6e, 0x02,
    0x2d, 0xe4, 0x4f, 0x1a, 0x5e, 0xa5, 0x9c, 0x4a, 0xe8, 0x5b, 0x61, 0xd2, 0x0e, 0xb6, 0x81, 0xa2,
    0x97, 0x84, 0x82, 0xf5, 0x86, 0x80, 0xf3, 0xa1, 0xb8, 0xb1, 0x31, 0xe3, 0xeb, 0xd1, 0x40, 0xbc,
    0x7c, 0xd0, 0x4d, 0x9f, 0x45, 0x56, 0x8c, 0x21, 0x57, 0xd7, 0x14, 0xef, 0x13, 0x79, 0xb3, 0x4e,
    0x2e, 0x6d, 0x46, 0x6c, 0xa4, 0xe1, 0x00, 0xa3, 0x3c, 0x26, 0xae, 0xd4, 0x1e, 0x3b, 0xe6, 0x3a,
    0x3d, 0x53, 0x65, 0xe9, 0x0d, 0x64, 0x36, 0xb0, 0x15, 0xdd, 0xec, 0x37, 0xce, 0x01, 0x0a, 0x85,
    0x60, 0xd9, 0xfc, 0x09, 0x1c, 0xe5, 0x7b, 0x41, 0x98, 0x12, 0xcd, 0xad, 0x7e, 0x17, 0x8d, 0x1d,
    0x52, 0x75, 0x95, 0x50, 0x44, 0xfb, 0x10, 0xf7, 0xc0, 0x48, 0x68, 0xd5, 0xd3, 0x29, 0x03, 0xed,
    0xb2, 0x04, 0xcf, 0x89, 0x38, 0x42, 0x63, 0xa8, 0x6b, 0xaf, 0xde, 0x32, 0x7a, 0x7f, 0xbb, 0x43,
    0x19, 0xfa, 0xbf, 0x07, 0xf9, 0x2c, 0x7d, 0xe0, 0xf0, 0xda, 0xea, 0x8f, 0xaa, 0xf4, 0x5c, 0x96,
    0x49, 0x5f, 0x9b, 0xc7, 0x93, 0x39, 0x83, 0x4c, 0xc5, 0xa6, 0x8a, 0x8e, 0x2a, 0x72, 0x25, 0xff,
    0xdf, 0x20, 0x1b, 0xfd, 0xab, 0xf1, 0x78, 0x87, 0x8b, 0xd8, 0x28, 0x92, 0x66, 0xb7, 0xbd, 0x71,
    0xcb, 0xa9, 0xca, 0xdc, 0x9a, 0x2b, 0xf8, 0x06, 0xc6, 0x70, 0x11, 0x62, 0x99, 0x1f, 0x22, 0x51,
];

/// Inverse of [`S_BOX`].
#[rustfmt::skip]
pub const INV_S_BOX: [u8; 256] = [
    0x76, 0x8d, 0x3f, 0xae, 0xb1, 0x16, 0xf7, 0xc3, 0x36, 0x93, 0x8e, 0x2b, 0x22, 0x84, 0x4c, 0x1b,
    0xa6, 0xfa, 0x99, 0x6c, 0x6a, 0x88, 0x0d, 0x9d, 0x14, 0xc0, 0x43, 0xe2, 0x94, 0x9f, 0x7c, 0xfd,
    0xe1, 0x67, 0xfe, 0x32, 0x1a, 0xde, 0x79, 0x30, 0xea, 0xad, 0xdc, 0xf5, 0xc5, 0x40, 0x70, 0x28,
    0x21, 0x5a, 0xbb, 0x39, 0x1f, 0x35, 0x86, 0x8b, 0xb4, 0xd5, 0x7f, 0x7d, 0x78, 0x80, 0x2c, 0x13,
    0x5e, 0x97, 0xb5, 0xbf, 0xa4, 0x64, 0x72, 0x1e, 0xa9, 0xd0, 0x47, 0x3c, 0xd7, 0x62, 0x6f, 0x42,
    0xa3, 0xff, 0xa0, 0x81, 0x1d, 0x05, 0x65, 0x68, 0x0f, 0x02, 0x0e, 0x49, 0xce, 0x3d, 0x44, 0xd1,
    0x90, 0x4a, 0xfb, 0xb6, 0x85, 0x82, 0xec, 0x10, 0xaa, 0x15, 0x2a, 0xb8, 0x73, 0x71, 0x3e, 0x1c,
    0xf9, 0xef, 0xdd, 0x38, 0x00, 0xa1, 0x08, 0x20, 0xe6, 0x6d, 0xbc, 0x96, 0x60, 0xc6, 0x9c, 0xbd,
    0x55, 0x4e, 0x52, 0xd6, 0x51, 0x8f, 0x54, 0xe7, 0x2f, 0xb3, 0xda, 0xe8, 0x66, 0x9e, 0xdb, 0xcb,
    0x0c, 0x0b, 0xeb, 0xd4, 0x31, 0xa2, 0xcf, 0x50, 0x98, 0xfc, 0xf4, 0xd2, 0x46, 0x23, 0x3b, 0x63,
    0x18, 0x57, 0x4f, 0x77, 0x74, 0x45, 0xd9, 0x37, 0xb7, 0xf1, 0xcc, 0xe4, 0x01, 0x9b, 0x7a, 0xb9,
    0x87, 0x59, 0xb0, 0x6e, 0x07, 0x12, 0x4d, 0xed, 0x58, 0x03, 0x06, 0xbe, 0x5f, 0xee, 0x3a, 0xc2,
    0xa8, 0x26, 0x19, 0x09, 0x29, 0xd8, 0xf8, 0xd3, 0x33, 0x17, 0xf2, 0xf0, 0x2e, 0x9a, 0x8c, 0xb2,
    0x61, 0x5d, 0x4b, 0xac, 0x7b, 0xab, 0x2d, 0x69, 0xe9, 0x91, 0xc9, 0x04, 0xf3, 0x89, 0xba, 0xe0,
    0xc7, 0x75, 0x27, 0x5b, 0x41, 0x95, 0x7e, 0x11, 0x48, 0x83, 0xca, 0x5c, 0x8a, 0xaf, 0x24, 0x6b,
    0xc8, 0xe5, 0x25, 0x56, 0xcd, 0x53, 0x34, 0xa7, 0xf6, 0xc4, 0xc1, 0xa5, 0x92, 0xe3, 0x0a, 0xdf,
];

/// Substitutes one byte through the forward table.
#[inline]
pub fn sub_byte(byte: u8) -> u8 {
    S_BOX[byte as usize]
}

/// Substitutes one byte through the inverse table.
#[inline]
pub fn inv_sub_byte(byte: u8) -> u8 {
    INV_S_BOX[byte as usize]
}

/// Applies [`sub_byte`] to each byte of `word`, keeping byte positions.
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sub_byte))
}

/// Rotates `[a0, a1, a2, a3]` to `[a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_mutual_inverses() {
        for b in 0..=255u8 {
            assert_eq!(inv_sub_byte(sub_byte(b)), b);
            assert_eq!(sub_byte(inv_sub_byte(b)), b);
        }
    }

    #[test]
    fn forward_table_is_a_permutation() {
        let mut seen = [false; 256];
        for &value in S_BOX.iter() {
            assert!(!seen[value as usize], "duplicate entry {value:#04x}");
            seen[value as usize] = true;
        }
    }

    #[test]
    fn table_differs_from_fips_sbox() {
        // FIPS-197 maps 0x00 -> 0x63 and 0x53 -> 0xed.
        assert_eq!(sub_byte(0x00), 0x74);
        assert_eq!(sub_byte(0x53), 0xf5);
        assert_eq!(sub_byte(0xff), 0x51);
        assert_eq!(inv_sub_byte(0x00), 0x76);
    }

    #[test]
    fn word_helpers() {
        assert_eq!(rot_word(0x0102_0304), 0x0203_0401);
        assert_eq!(sub_word(0x0000_0000), 0x7474_7474);
        assert_eq!(
            sub_word(0x00ff_5300),
            u32::from_be_bytes([0x74, 0x51, 0xf5, 0x74])
        );
    }
}
