//! # Wallet Record DTOs
//!
//! The shape of the wallet session as it sits in durable storage. Field order
//! matters: serializing a deserialized record must reproduce the stored bytes,
//! so the structs list fields in the order they are written.

use serde::{Deserialize, Serialize};

/// Account half of the stored wallet record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccount {
    pub private_key: String,
    pub address: String,
    pub balance: String,
}

/// Complete stored wallet record: account plus space-separated recovery phrase.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    pub account: StoredAccount,
    pub seed_phrase: String,
}

// Key material must never reach a log line through `{:?}`.
impl std::fmt::Debug for StoredAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredAccount")
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .field("balance", &self.balance)
            .finish()
    }
}

impl std::fmt::Debug for StoredWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredWallet")
            .field("account", &self.account)
            .field("seed_phrase", &"<redacted>")
            .finish()
    }
}
