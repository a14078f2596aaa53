//! # Session Store
//!
//! Owns the wallet session: the in-memory copy and its serialized shadow in
//! durable storage under the [`SESSION_KEY`] key.
//!
//! ## Lifecycle
//!
//! ```text
//!   startup ──restore_session()──► Some(session) ──clear_session()──► None
//!      │                                ▲
//!      └──► None ──create_session(s)────┘
//! ```
//!
//! Durable storage problems never escape as failures of the UI: a missing,
//! unreadable, or malformed record restores as "no session".

use shared::dto::wallet::{StoredAccount, StoredWallet};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::service::KeyValueStore;

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "wallet";

/// Number of words in a recovery phrase.
pub const SEED_PHRASE_WORDS: usize = 12;

/// Opaque private key material. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(material: impl Into<String>) -> Self {
        Self(material.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Ordered twelve-word recovery phrase.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedPhrase(Vec<String>);

impl SeedPhrase {
    /// Build from individual words.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != SEED_PHRASE_WORDS {
            return Err(AppError::Validation(format!(
                "Seed phrase must have {} words, got {}",
                SEED_PHRASE_WORDS,
                words.len()
            )));
        }
        if words.iter().any(|w| w.is_empty() || w.contains(char::is_whitespace)) {
            return Err(AppError::Validation("Seed phrase words must be non-empty and contain no whitespace".to_string()));
        }
        Ok(Self(words))
    }

    /// Parse the stored single-space-separated form.
    ///
    /// Runs of spaces or surrounding whitespace are rejected rather than
    /// normalized, so every accepted phrase re-serializes to the same string.
    pub fn parse(phrase: &str) -> Result<Self> {
        Self::from_words(phrase.split(' ').map(str::to_string).collect())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Stored and clipboard form: words joined by single spaces.
    pub fn to_phrase(&self) -> String {
        self.0.join(" ")
    }
}

impl std::fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeedPhrase(<{} words redacted>)", self.0.len())
    }
}

/// The active wallet.
///
/// Fields are read-only once constructed; only the Account Creator builds
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    address: String,
    balance: String,
    private_key: PrivateKey,
    seed_phrase: SeedPhrase,
}

impl Session {
    pub fn new(address: impl Into<String>, balance: impl Into<String>, private_key: PrivateKey, seed_phrase: SeedPhrase) -> Self {
        Self {
            address: address.into(),
            balance: balance.into(),
            private_key,
            seed_phrase,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Balance as a decimal string, exactly as recorded.
    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn seed_phrase(&self) -> &SeedPhrase {
        &self.seed_phrase
    }

    /// Durable record form.
    pub fn to_stored(&self) -> StoredWallet {
        StoredWallet {
            account: StoredAccount {
                private_key: self.private_key.expose().to_string(),
                address: self.address.clone(),
                balance: self.balance.clone(),
            },
            seed_phrase: self.seed_phrase.to_phrase(),
        }
    }

    /// Rebuild a session from its durable record.
    pub fn from_stored(stored: StoredWallet) -> Result<Self> {
        let seed_phrase = SeedPhrase::parse(&stored.seed_phrase)?;
        Ok(Self {
            address: stored.account.address,
            balance: stored.account.balance,
            private_key: PrivateKey(stored.account.private_key),
            seed_phrase,
        })
    }

    /// Serialize to the exact bytes written to storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_stored())?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let stored: StoredWallet = serde_json::from_str(raw)?;
        Self::from_stored(stored)
    }
}

/// Single owner of the wallet session and its durable shadow.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    current: Option<Session>,
}

impl SessionStore {
    /// Empty store over `storage`. Call [`SessionStore::restore_session`] to load.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, current: None }
    }

    /// Store the session in memory and in durable storage.
    ///
    /// The in-memory session is set before the durable write, so reads see it
    /// immediately even if persisting fails; the error is returned so the
    /// caller can warn that the wallet will not survive a restart.
    pub fn create_session(&mut self, session: Session) -> Result<()> {
        tracing::info!(address = %session.address(), "Session created");
        let serialized = session.to_json();
        self.current = Some(session);

        let serialized = serialized?;
        self.storage.set(SESSION_KEY, &serialized).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist session");
            e
        })
    }

    /// Load the session from durable storage.
    ///
    /// Returns whether a session is now active. Absent, unreadable, or
    /// malformed data all leave the store empty.
    pub fn restore_session(&mut self) -> bool {
        self.current = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match Session::from_json(&raw) {
                Ok(session) => {
                    tracing::info!(address = %session.address(), "Session restored from storage");
                    Some(session)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored session is malformed, starting without a session");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("No stored session");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session, starting without a session");
                None
            }
        };
        self.current.is_some()
    }

    /// Drop the in-memory session and its durable shadow. Idempotent.
    pub fn clear_session(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("Session cleared");
        }
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::error!(error = %e, "Failed to remove stored session");
        }
    }

    pub fn has_session(&self) -> bool {
        self.current.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;
    use proptest::prelude::*;

    /// Store whose every operation fails.
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Storage("disk unavailable".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage("disk unavailable".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(AppError::Storage("disk unavailable".to_string()))
        }
    }

    fn words(prefix: &str) -> Vec<String> {
        (0..SEED_PHRASE_WORDS).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn sample_session() -> Session {
        Session::new(
            "0x52908400098527886E0F7030069857D2E4169EE7",
            "0",
            PrivateKey::new("0x4c0883a69102937d6231471b5dbb6204fe512961708279f0b1f5e3e9e1b0c3a1"),
            SeedPhrase::from_words(words("word")).unwrap(),
        )
    }

    #[test]
    fn test_create_then_restore_yields_equal_session() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = SessionStore::new(storage.clone());
        store.create_session(sample_session()).unwrap();
        assert!(store.has_session());

        let mut restarted = SessionStore::new(storage);
        assert!(restarted.restore_session());
        assert_eq!(restarted.session(), Some(&sample_session()));
    }

    #[test]
    fn test_clear_then_restore_yields_no_session() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = SessionStore::new(storage.clone());
        store.create_session(sample_session()).unwrap();
        store.clear_session();
        assert!(!store.has_session());

        let mut restarted = SessionStore::new(storage.clone());
        assert!(!restarted.restore_session());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = SessionStore::new(Arc::new(MemoryStore::new()));
        store.clear_session();
        store.clear_session();
        assert!(!store.has_session());
    }

    #[test]
    fn test_malformed_storage_restores_as_no_session() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(SESSION_KEY, "{\"account\": ").unwrap();

        let mut store = SessionStore::new(storage);
        assert!(!store.restore_session());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_wrong_word_count_restores_as_no_session() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(SESSION_KEY, r#"{"account":{"privateKey":"k","address":"a","balance":"0"},"seedPhrase":"only three words"}"#)
            .unwrap();

        let mut store = SessionStore::new(storage);
        assert!(!store.restore_session());
    }

    #[test]
    fn test_storage_failure_degrades_to_no_session() {
        let mut store = SessionStore::new(Arc::new(FailingStore));
        assert!(!store.restore_session());
        store.clear_session();
        assert!(!store.has_session());
    }

    #[test]
    fn test_create_is_visible_even_when_persist_fails() {
        let mut store = SessionStore::new(Arc::new(FailingStore));
        let result = store.create_session(sample_session());

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(store.has_session());
        assert_eq!(store.session().map(Session::address), Some(sample_session().address()));
    }

    #[test]
    fn test_stored_layout_matches_wallet_record() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = SessionStore::new(storage.clone());
        store.create_session(sample_session()).unwrap();

        let raw = storage.get(SESSION_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["account"]["address"], "0x52908400098527886E0F7030069857D2E4169EE7");
        assert_eq!(value["account"]["balance"], "0");
        assert_eq!(value["seedPhrase"], words("word").join(" "));
    }

    #[test]
    fn test_seed_phrase_rejects_irregular_spacing() {
        let phrase = words("w").join("  ");
        assert!(SeedPhrase::parse(&phrase).is_err());
        assert!(SeedPhrase::parse(&format!(" {}", words("w").join(" "))).is_err());
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let debug = format!("{:?}", sample_session());
        assert!(!debug.contains("4c0883"));
        assert!(!debug.contains("word0"));
        assert!(debug.contains("0x5290"));
    }

    proptest! {
        #[test]
        fn prop_restore_after_create_is_identity(
            address in "\\PC{1,64}",
            balance in "[0-9]{1,6}(\\.[0-9]{1,6})?",
            key in "0x[0-9a-f]{64}",
            seed in proptest::collection::vec("[a-z]{3,8}", SEED_PHRASE_WORDS),
        ) {
            let session = Session::new(address, balance, PrivateKey::new(key), SeedPhrase::from_words(seed).unwrap());
            let storage = Arc::new(MemoryStore::new());
            SessionStore::new(storage.clone()).create_session(session.clone()).unwrap();

            let raw = storage.get(SESSION_KEY).unwrap().unwrap();
            prop_assert_eq!(Session::from_json(&raw).unwrap().to_json().unwrap(), raw);

            let mut restarted = SessionStore::new(storage);
            prop_assert!(restarted.restore_session());
            prop_assert_eq!(restarted.session(), Some(&session));
        }
    }
}
