//! Command-line interface for `aesv`.

#![forbid(unsafe_code)]

use aesv_core::{decode_block, encode_block, Aes, Block, Variant};
use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hex_literal::hex;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Single-block AES CLI (non-standard S-box; not interoperable with FIPS-197 AES).
#[derive(Parser)]
#[command(name = "aesv", version, author, about)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Key-size selection.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Aes128,
    Aes192,
    Aes256,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Aes128 => Variant::Aes128,
            VariantArg::Aes192 => Variant::Aes192,
            VariantArg::Aes256 => Variant::Aes256,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// Key size.
        #[arg(long, value_enum, env = "AESV_VARIANT", default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Key as hex (32, 48 or 64 characters depending on the variant).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// Key size.
        #[arg(long, value_enum, env = "AESV_VARIANT", default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Key as hex.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Verify encrypt/decrypt round-trips for random blocks.
    Check {
        /// Key size.
        #[arg(long, value_enum, env = "AESV_VARIANT", default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Key as hex; a random key is drawn when omitted.
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the pinned known-answer vectors for every key size.
    Kat,
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Key size.
        #[arg(long, value_enum, env = "AESV_VARIANT", default_value_t = VariantArg::Aes128)]
        variant: VariantArg,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// `(variant, key, plaintext, ciphertext)` pinned for this S-box.
const KNOWN_ANSWERS: [(Variant, &[u8], [u8; 16], [u8; 16]); 6] = [
    (
        Variant::Aes128,
        &[0u8; 16],
        [0u8; 16],
        hex!("aa05cb9bcb75eef4014d7a93a6aa80eb"),
    ),
    (
        Variant::Aes192,
        &[0u8; 24],
        [0u8; 16],
        hex!("ed91611004f9e91c72adfe85baae6a76"),
    ),
    (
        Variant::Aes256,
        &[0u8; 32],
        [0u8; 16],
        hex!("93b25d09419c4ade116c3548a4c9099f"),
    ),
    (
        Variant::Aes128,
        &hex!("000102030405060708090a0b0c0d0e0f"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("d7b90936bc6f64efb46036a42151dcf7"),
    ),
    (
        Variant::Aes192,
        &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("8d9c3dd73877e32aff92eeab7866a43b"),
    ),
    (
        Variant::Aes256,
        &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("94e608cc650caf34e29f89634385ed84"),
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Enc {
            variant,
            key_hex,
            block_hex,
        } => cmd_enc(variant.into(), &key_hex, &block_hex),
        Commands::Dec {
            variant,
            key_hex,
            block_hex,
        } => cmd_dec(variant.into(), &key_hex, &block_hex),
        Commands::Check {
            variant,
            key_hex,
            samples,
            seed,
        } => cmd_check(variant.into(), key_hex.as_deref(), samples, seed),
        Commands::Kat => cmd_kat(),
        Commands::Demo { variant, seed } => cmd_demo(variant.into(), seed),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_enc(variant: Variant, key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex("key", key_hex)?;
    let block = decode_hex("block", block_hex)?;
    let ciphertext = encode_block(variant, &block, &key).context("encrypt block")?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(variant: Variant, key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex("key", key_hex)?;
    let block = decode_hex("block", block_hex)?;
    let plaintext = decode_block(variant, &block, &key).context("decrypt block")?;
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_check(
    variant: Variant,
    key_hex: Option<&str>,
    samples: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key = match key_hex {
        Some(hex_str) => decode_hex("key", hex_str)?,
        None => random_key(&mut rng, variant),
    };
    let aes = Aes::new(variant, &key).context("expand key")?;

    for i in 0..samples {
        let mut block: Block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let ciphertext = aes.encrypt_block(&block);
        if aes.decrypt_block(&ciphertext) != block {
            bail!(
                "sample {i} failed to round-trip: {}",
                hex::encode(block)
            );
        }
    }
    info!(%variant, samples, "round-trip check passed");
    println!("{variant}: {samples} samples round-tripped");
    Ok(())
}

fn cmd_kat() -> Result<()> {
    let mut failures = 0usize;
    for (variant, key, plaintext, expected) in KNOWN_ANSWERS {
        let ciphertext = encode_block(variant, &plaintext, key)?;
        let recovered = decode_block(variant, &expected, key)?;
        let ok = ciphertext == expected && recovered == plaintext;
        if !ok {
            warn!(%variant, key = %hex::encode(key), "known-answer mismatch");
            failures += 1;
        }
        println!(
            "{} {variant} key={} ct={}",
            if ok { "PASS" } else { "FAIL" },
            hex::encode(key),
            hex::encode(ciphertext)
        );
    }
    ensure!(failures == 0, "{failures} known-answer vectors failed");
    Ok(())
}

fn cmd_demo(variant: Variant, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key = random_key(&mut rng, variant);
    let aes = Aes::new(variant, &key).context("expand key")?;

    let mut block: Block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = aes.encrypt_block(&block);
    let decrypted = aes.decrypt_block(&ciphertext);

    println!("variant: {variant}");
    println!("demo key: {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn decode_hex(what: &str, hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    debug!(what, len = bytes.len(), "decoded hex argument");
    Ok(bytes)
}

fn random_key(rng: &mut impl RngCore, variant: Variant) -> Vec<u8> {
    let mut key = vec![0u8; variant.key_len()];
    rng.fill_bytes(&mut key);
    key
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
