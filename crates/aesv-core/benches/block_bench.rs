use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aesv_core::{decrypt_block, encrypt_block, expand_key, Variant};

fn bench_key_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("key_expansion");
    for variant in Variant::ALL {
        let mut key = vec![0u8; variant.key_len()];
        rng.fill_bytes(&mut key);
        group.bench_function(variant.to_string(), |b| {
            b.iter(|| expand_key(variant, black_box(&key)));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut group = c.benchmark_group("block");
    for variant in Variant::ALL {
        let mut key = vec![0u8; variant.key_len()];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let schedule = expand_key(variant, &key).expect("valid key");

        group.bench_function(format!("encrypt/{variant}"), |b| {
            b.iter(|| encrypt_block(black_box(&block), &schedule));
        });
        group.bench_function(format!("decrypt/{variant}"), |b| {
            b.iter(|| decrypt_block(black_box(&block), &schedule));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_block);
criterion_main!(benches);
