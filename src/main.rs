mod args;

use args::{Cli, Commands};
use clap::Parser;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("either --key or --gen-key is required")]
    MissingKey,

    #[error("expected 48 hex digits, got {len}")]
    BadHexLength { len: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),

    #[error(transparent)]
    BaseKing(#[from] baseking::Error),
}

fn main() {
    if let Err(e) = baseking_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn baseking_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // read or generate key
            let key = match (enc.common.key, enc.gen_key) {
                (Some(hex), _) => baseking::Key::try_from_words(&parse_words(&hex)?)?,
                (None, true) => {
                    let key = baseking::Key::random()?;
                    println!("key        = {}", format_words(key.as_words()));
                    key
                }
                (None, false) => return Err(CliError::MissingKey),
            };

            let cipher = baseking::Cipher::new(&key);
            let mut block = parse_words(&enc.common.block)?;
            cipher.encrypt_block(&mut block);
            println!("ciphertext = {}", format_words(&block));
            Ok(())
        }
        Commands::Decrypt(common) => {
            let key_hex = common.key.ok_or(CliError::MissingKey)?;
            let key = baseking::Key::try_from_words(&parse_words(&key_hex)?)?;

            let cipher = baseking::Cipher::new(&key);
            let mut block = parse_words(&common.block)?;
            cipher.decrypt_block(&mut block);
            println!("plaintext  = {}", format_words(&block));
            Ok(())
        }
    }
}

/// Parses 48 hex digits into 12 words in canonical text order: the first
/// four digits are word 11, the last four are word 0. Whitespace between
/// words is accepted so printed vectors can be pasted verbatim.
fn parse_words(s: &str) -> Result<[u16; 12], CliError> {
    let hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if hex.len() != 48 {
        return Err(CliError::BadHexLength { len: hex.len() });
    }

    let mut words = [0u16; 12];
    for i in 0..12 {
        words[11 - i] = u16::from_str_radix(&hex[4 * i..4 * i + 4], 16)?;
    }
    Ok(words)
}

/// Formats 12 words in canonical text order, space separated, matching the
/// reference implementation's output.
fn format_words(words: &[u16; 12]) -> String {
    words
        .iter()
        .rev()
        .map(|w| format!("{w:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
