use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt one 192-bit block
    Encrypt(EncryptArgs),

    /// Decrypt one 192-bit block
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Key as 48 hex digits, most significant word first.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: Option<String>,

    /// Block as 48 hex digits, most significant word first.
    #[arg(value_name = "BLOCK_HEX")]
    pub block: String,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (printed to stdout before the ciphertext)
    #[arg(long = "gen-key", conflicts_with = "key")]
    pub gen_key: bool,
}
