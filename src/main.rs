// Entry point for the ledger driver.
// The demo command replays the whole flow: issue a certificate, mine, seal, sign, verify.
use cert_ledger::cli::DEFAULT_CERTIFICATE;
use cert_ledger::{
    sign, verify, Command, KeyPair, Ledger, LedgerError, Opt, ProofOfWork, GLOBAL_CONFIG,
};
use clap::Parser;
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use log::{error, info, warn};
use std::process;

fn main() {
    let opt = Opt::parse();

    // I load the settings file before the logger so it can choose the log level
    let loaded = match &opt.config {
        Some(path) => GLOBAL_CONFIG.load_file(path),
        None => Ok(()),
    };
    let (level, level_error) = GLOBAL_CONFIG.get_log_level_or_default();
    env_logger::builder().filter_level(level).init();
    if let Some(e) = level_error {
        warn!("{e}; logging at {level}");
    }

    let result = match loaded {
        Ok(()) => run_command(opt.command),
        Err(e) => Err(e.into()),
    };
    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Demo {
            sender,
            recipient,
            message,
        } => {
            let ledger = Ledger::new();
            let key_pair = KeyPair::generate()?;

            let next_index = ledger.append_record(&sender, &recipient, &message);
            info!("Certificate queued for block {next_index}");

            let previous = ledger.last_block()?.get_puzzle_solution();
            let solution = search(previous)?;
            let block = ledger.seal_block(solution)?;
            info!(
                "Block {} sealed with {} records",
                block.get_index(),
                block.get_records().len()
            );

            let signature = sign(&key_pair.get_secret_bytes(), &message)?;
            let is_verified = verify(key_pair.get_public_key(), &signature, &message);

            println!("{}", serde_json::to_string_pretty(&ledger.blocks())?);
            if message != DEFAULT_CERTIFICATE {
                println!("Certificate: {message}");
            }
            println!("Certificate verified: {is_verified}");
        }
        Command::Mine { previous } => {
            println!("{}", search(previous)?);
        }
        Command::Validate {
            previous,
            candidate,
        } => {
            println!("{}", ProofOfWork::is_valid(previous, candidate));
        }
        Command::Keygen => {
            let key_pair = KeyPair::generate()?;
            println!("Private key: {}", HEXLOWER.encode(&key_pair.get_secret_bytes()));
            println!("Public key: {}", HEXLOWER.encode(key_pair.get_public_key()));
        }
        Command::Sign {
            private_key,
            message,
        } => {
            let secret = HEXLOWER_PERMISSIVE
                .decode(private_key.as_bytes())
                .map_err(|e| LedgerError::InvalidKey(format!("Private key is not hex: {e}")))?;
            let signature = sign(&secret, &message)?;
            println!("{}", HEXLOWER.encode(&signature));
        }
        Command::Verify {
            public_key,
            signature,
            message,
        } => {
            let decoded = HEXLOWER_PERMISSIVE
                .decode(public_key.as_bytes())
                .and_then(|key| {
                    HEXLOWER_PERMISSIVE
                        .decode(signature.as_bytes())
                        .map(|sig| (key, sig))
                });
            // Undecodable input verifies as false, same as any other bad signature
            let is_verified = match decoded {
                Ok((key, sig)) => verify(&key, &sig, &message),
                Err(e) => {
                    warn!("Could not decode hex input: {e}");
                    false
                }
            };
            println!("{is_verified}");
        }
    }
    Ok(())
}

// I bound the search only when a timeout is configured
fn search(previous: u64) -> Result<u64, LedgerError> {
    match GLOBAL_CONFIG.get_mining_timeout()? {
        Some(timeout) => ProofOfWork::find_solution_with_timeout(previous, timeout),
        None => Ok(ProofOfWork::find_solution(previous)),
    }
}
