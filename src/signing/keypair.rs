use crate::error::Result;
use crate::signing::signer::{parse_secret_key, SECP256K1_CONTEXT};
use crate::signing::sign;
use rand::rngs::OsRng;
use secp256k1::constants::{PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};
use secp256k1::{PublicKey, SecretKey};

/// Length of a raw secp256k1 private scalar
pub const SECRET_KEY_LEN: usize = SECRET_KEY_SIZE;

/// Length of a compressed secp256k1 public key (`0x02|0x03 || X`)
pub const PUBLIC_KEY_LEN: usize = PUBLIC_KEY_SIZE;

/// A secp256k1 private scalar with its public key.
///
/// The ledger never needs one; drivers and tests use it to produce the opaque
/// key bytes that [`sign`] and [`crate::signing::verify`] consume.
#[derive(Debug, Clone)]
pub struct KeyPair {
    secret_key: SecretKey,
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl KeyPair {
    pub fn generate() -> Result<KeyPair> {
        let secret_key = SecretKey::new(&mut OsRng);
        Ok(Self::from_secret_key(secret_key))
    }

    /// Parse a raw 32-byte scalar; zero and values at or above the group order are rejected
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<KeyPair> {
        let secret_key = parse_secret_key(bytes)?;
        Ok(Self::from_secret_key(secret_key))
    }

    fn from_secret_key(secret_key: SecretKey) -> KeyPair {
        let public_key = PublicKey::from_secret_key(&SECP256K1_CONTEXT, &secret_key);
        KeyPair {
            secret_key,
            public_key: public_key.serialize(),
        }
    }

    /// Compressed public key
    pub fn get_public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn get_uncompressed_public_key(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        PublicKey::from_secret_key(&SECP256K1_CONTEXT, &self.secret_key).serialize_uncompressed()
    }

    pub fn get_secret_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.secret_key.secret_bytes()
    }

    pub fn sign(&self, message: &str) -> Result<Vec<u8>> {
        sign(&self.get_secret_bytes(), message)
    }
}
