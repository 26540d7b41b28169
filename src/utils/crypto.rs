use data_encoding::HEXLOWER;
use log::warn;
use ring::digest::{Context, SHA256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of a SHA-256 digest rendered as lowercase hex
pub const SHA256_HEX_LEN: usize = 64;

/// Seconds since the Unix epoch, with sub-second precision.
///
/// A clock set before the epoch yields `0.0` rather than an error so that
/// block construction stays infallible.
pub fn current_timestamp() -> f64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_secs_f64(),
        Err(e) => {
            warn!("System clock is before the Unix epoch: {e}");
            0.0
        }
    }
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn sha256_hex(data: &[u8]) -> String {
    HEXLOWER.encode(sha256_digest(data).as_slice())
}
