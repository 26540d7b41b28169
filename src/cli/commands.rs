use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Certificate text the demo run issues, signs and verifies
pub const DEFAULT_CERTIFICATE: &str = "Bachelor's Degree Certificate";

#[derive(Debug, Parser)]
#[command(name = "cert-ledger")]
pub struct Opt {
    #[arg(
        long = "config",
        global = true,
        help = "TOML settings file (log_level, mining_timeout_secs)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "demo",
        about = "Issue a certificate, mine and seal a block, then sign and verify it"
    )]
    Demo {
        #[arg(long = "sender", default_value = "UniversityXYZ")]
        sender: String,
        #[arg(long = "recipient", default_value = "Student123")]
        recipient: String,
        #[arg(long = "message", default_value = DEFAULT_CERTIFICATE)]
        message: String,
    },
    #[command(name = "mine", about = "Find the puzzle solution following PREVIOUS")]
    Mine {
        #[arg(help = "The previous block's puzzle solution")]
        previous: u64,
    },
    #[command(name = "validate", about = "Check whether CANDIDATE solves the puzzle")]
    Validate {
        #[arg(help = "The previous block's puzzle solution")]
        previous: u64,
        #[arg(help = "The claimed solution")]
        candidate: u64,
    },
    #[command(name = "keygen", about = "Generate a secp256k1 key pair")]
    Keygen,
    #[command(name = "sign", about = "Sign a message with a hex 32-byte private key")]
    Sign {
        #[arg(help = "Hex-encoded 32-byte secp256k1 private key")]
        private_key: String,
        #[arg(help = "Message to sign")]
        message: String,
    },
    #[command(name = "verify", about = "Verify a hex signature over a message")]
    Verify {
        #[arg(help = "Hex-encoded public key (compressed, uncompressed or bare X || Y)")]
        public_key: String,
        #[arg(help = "Hex-encoded signature")]
        signature: String,
        #[arg(help = "Message that was signed")]
        message: String,
    },
}
