//! Command-line interface for `aes128-core`.

#![forbid(unsafe_code)]

use aes128_core::{Aes128Ecb, Aes128Key};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128-ECB CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    about = "AES-128 in ECB mode with PKCS#7 padding"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt UTF-8 text and print the ciphertext as hex.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(value_name = "KEY_HEX")]
        key_hex: String,
        /// Plaintext to encrypt.
        plaintext: String,
    },
    /// Decrypt hex ciphertext and print the recovered plaintext.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(value_name = "KEY_HEX")]
        key_hex: String,
        /// Ciphertext as hex.
        #[arg(value_name = "CIPHERTEXT_HEX")]
        ciphertext_hex: String,
        /// Print the recovered bytes as hex instead of UTF-8 text.
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Print a freshly generated key as hex.
    Keygen {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: generate a key, encrypt the text, decrypt it back.
    Demo {
        /// Plaintext to round-trip.
        plaintext: String,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key_hex, plaintext } => {
            println!("{}", cmd_encrypt(&key_hex, &plaintext)?);
        }
        Commands::Decrypt {
            key_hex,
            ciphertext_hex,
            raw,
        } => {
            println!("{}", cmd_decrypt(&key_hex, &ciphertext_hex, raw)?);
        }
        Commands::Keygen { seed } => {
            let key = generate_key(&mut seeded_rng(seed));
            println!("{}", hex::encode(key.0));
        }
        Commands::Demo { plaintext, seed } => cmd_demo(&plaintext, seed)?,
    }
    Ok(())
}

fn cmd_encrypt(key_hex: &str, plaintext: &str) -> Result<String> {
    let cipher = Aes128Ecb::from_key(&parse_key_hex(key_hex)?);
    Ok(hex::encode(cipher.encrypt(plaintext.as_bytes())))
}

fn cmd_decrypt(key_hex: &str, ciphertext_hex: &str, raw: bool) -> Result<String> {
    let cipher = Aes128Ecb::from_key(&parse_key_hex(key_hex)?);
    let ciphertext = hex::decode(ciphertext_hex.trim()).context("decode ciphertext hex")?;
    let plaintext = cipher.decrypt(&ciphertext).context("decrypt ciphertext")?;
    if raw {
        return Ok(hex::encode(plaintext));
    }
    String::from_utf8(plaintext).context("plaintext is not valid UTF-8 (use --raw)")
}

fn cmd_demo(plaintext: &str, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key_hex = hex::encode(generate_key(&mut rng).0);
    println!("generated key: {}", key_hex);

    let ciphertext_hex = cmd_encrypt(&key_hex, plaintext)?;
    println!("ciphertext: {}", ciphertext_hex);

    let recovered = cmd_decrypt(&key_hex, &ciphertext_hex, false)?;
    println!("recovered plaintext: {}", recovered);
    if recovered != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn generate_key(rng: &mut (impl RngCore + CryptoRng)) -> Aes128Key {
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    Aes128Key::from(key)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes128_core::{Error, PaddingError};
    use clap::CommandFactory;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn encrypt_then_decrypt_text() {
        let ct = cmd_encrypt(KEY_HEX, "hello, world").unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(cmd_decrypt(KEY_HEX, &ct, false).unwrap(), "hello, world");
    }

    #[test]
    fn decrypt_raw_prints_hex() {
        let ct = cmd_encrypt(KEY_HEX, "\u{1}\u{2}").unwrap();
        assert_eq!(cmd_decrypt(KEY_HEX, &ct, true).unwrap(), "0102");
    }

    #[test]
    fn key_must_be_sixteen_bytes() {
        let err = parse_key_hex("00112233").unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidKeyLength { actual: 4 })
        );
        assert!(parse_key_hex("not hex").is_err());
        assert!(parse_key_hex(&format!("  {KEY_HEX}\n")).is_ok());
    }

    #[test]
    fn decrypt_surfaces_engine_errors() {
        let err = cmd_decrypt(KEY_HEX, "00", false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidCiphertextLength { actual: 1 })
        );

        let cipher = Aes128Ecb::from_key(&parse_key_hex(KEY_HEX).unwrap());
        let bogus = aes128_core::encrypt_block(&[0u8; 16], cipher.round_keys());
        let err = cmd_decrypt(KEY_HEX, &hex::encode(bogus), false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::Padding(PaddingError::InvalidLength { value: 0 }))
        );
    }

    #[test]
    fn non_utf8_plaintext_requires_raw() {
        let cipher = Aes128Ecb::from_key(&parse_key_hex(KEY_HEX).unwrap());
        let ct = hex::encode(cipher.encrypt(&[0xff, 0xfe]));
        assert!(cmd_decrypt(KEY_HEX, &ct, false).is_err());
        assert_eq!(cmd_decrypt(KEY_HEX, &ct, true).unwrap(), "fffe");
    }

    #[test]
    fn seeded_keys_are_reproducible() {
        let a = generate_key(&mut seeded_rng(Some(42)));
        let b = generate_key(&mut seeded_rng(Some(42)));
        let c = generate_key(&mut seeded_rng(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn demo_round_trips() {
        cmd_demo("the quick brown fox", Some(7)).unwrap();
    }
}
