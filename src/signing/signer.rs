use crate::error::{LedgerError, Result};
use crate::signing::SECRET_KEY_LEN;
use crate::utils::sha256_digest;
use once_cell::sync::Lazy;
use secp256k1::constants::{COMPACT_SIGNATURE_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};
use secp256k1::ecdsa::Signature;
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};

/// Shared secp256k1 context; building one is expensive
pub(crate) static SECP256K1_CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// Length of a compact signature (`r || s`)
pub const SIGNATURE_LEN: usize = COMPACT_SIGNATURE_SIZE;

/// Bare `X || Y` coordinates without the SEC1 tag byte
const RAW_POINT_LEN: usize = 64;
const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

fn message_digest(message: &str) -> Result<Message> {
    let digest = sha256_digest(message.as_bytes());
    Message::from_digest_slice(&digest)
        .map_err(|e| LedgerError::Crypto(format!("Invalid message digest: {e}")))
}

pub(crate) fn parse_secret_key(bytes: &[u8]) -> Result<SecretKey> {
    if bytes.len() != SECRET_KEY_LEN {
        return Err(LedgerError::InvalidKey(format!(
            "Private key must be {SECRET_KEY_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    SecretKey::from_slice(bytes).map_err(|e| {
        LedgerError::InvalidKey(format!("Private key is not a valid secp256k1 scalar: {e}"))
    })
}

/// Accepts compressed (33), uncompressed (65) or bare-coordinate (64) encodings
pub(crate) fn parse_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let parsed = if bytes.len() == RAW_POINT_LEN {
        let mut tagged = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        tagged[0] = UNCOMPRESSED_POINT_TAG;
        tagged[1..].copy_from_slice(bytes);
        PublicKey::from_slice(&tagged)
    } else {
        PublicKey::from_slice(bytes)
    };
    parsed.map_err(|e| {
        LedgerError::InvalidKey(format!(
            "Public key is not a secp256k1 point ({} bytes): {e}",
            bytes.len()
        ))
    })
}

/// Sign the UTF-8 bytes of `message` with a raw 32-byte secp256k1 scalar.
///
/// The message is hashed with SHA-256 and signed deterministically (RFC 6979).
pub fn sign(private_key: &[u8], message: &str) -> Result<Vec<u8>> {
    let secret_key = parse_secret_key(private_key)?;
    let signature = SECP256K1_CONTEXT.sign_ecdsa(&message_digest(message)?, &secret_key);
    Ok(signature.serialize_compact().to_vec())
}

/// Verify `signature` over `message`, reporting why it failed
pub fn verify_strict(public_key: &[u8], signature: &[u8], message: &str) -> Result<()> {
    let public_key = parse_public_key(public_key)?;
    if signature.len() != SIGNATURE_LEN {
        return Err(LedgerError::Crypto(format!(
            "Signature must be {SIGNATURE_LEN} bytes, got {}",
            signature.len()
        )));
    }

    let mut signature = Signature::from_compact(signature)
        .map_err(|e| LedgerError::Crypto(format!("Malformed signature: {e}")))?;
    // libsecp256k1 only verifies low-S signatures; other signers emit either half
    signature.normalize_s();

    SECP256K1_CONTEXT
        .verify_ecdsa(&message_digest(message)?, &signature, &public_key)
        .map_err(|_| LedgerError::Crypto("Signature verification failed".to_string()))
}

/// True iff `signature` is a valid signature of `message` under `public_key`.
///
/// Never fails: malformed keys and signatures simply do not verify.
pub fn verify(public_key: &[u8], signature: &[u8], message: &str) -> bool {
    verify_strict(public_key, signature, message).is_ok()
}
