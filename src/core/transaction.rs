use serde::{Deserialize, Serialize};

/// A pending or sealed ledger record.
///
/// Records are immutable once created; they move from the memory pool into
/// exactly one block when that block is sealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    sender: String,
    recipient: String,
    #[serde(rename = "certificate_data")]
    payload: String,
}

impl Transaction {
    pub fn new(sender: &str, recipient: &str, payload: &str) -> Transaction {
        Transaction {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            payload: payload.to_string(),
        }
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient.as_str()
    }

    pub fn get_payload(&self) -> &str {
        self.payload.as_str()
    }
}
