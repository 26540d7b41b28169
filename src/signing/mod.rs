//! Certificate signatures
//!
//! ECDSA over secp256k1 with SHA-256 message digests. Private keys are raw
//! 32-byte scalars. Signing and verification stand apart from the ledger:
//! records carry the certificate text, callers sign and verify it with these
//! functions.

pub mod keypair;
pub mod signer;

pub use keypair::{KeyPair, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
pub use signer::{sign, verify, verify_strict, SIGNATURE_LEN};
