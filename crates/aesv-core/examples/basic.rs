//! Encrypts and decrypts one block under each key size.

use aesv_core::{Aes, Variant};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let block = *b"first block here";

    for variant in Variant::ALL {
        let mut key = vec![0u8; variant.key_len()];
        rng.fill_bytes(&mut key);
        let aes = Aes::new(variant, &key).expect("key length matches variant");

        let ciphertext = aes.encrypt_block(&block);
        let recovered = aes.decrypt_block(&ciphertext);
        assert_eq!(recovered, block);

        println!("{variant}: {:02x?}", ciphertext);
    }

    println!("example succeeded; every block round-tripped");
}
