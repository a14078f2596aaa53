//! # Demo Account Creator
//!
//! Produces throwaway wallet sessions: random key material, a random address,
//! a zero balance, and twelve words from a built-in list. Nothing here is
//! cryptographically derived; the words do not encode the key.

use rand::Rng;

use crate::app::session::{PrivateKey, SeedPhrase, Session, SEED_PHRASE_WORDS};
use crate::core::error::Result;
use crate::core::service::AccountCreator;

const WORD_LIST: [&str; 64] = [
    "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract",
    "absurd", "abuse", "access", "accident", "account", "accuse", "achieve", "acid",
    "acoustic", "acquire", "across", "act", "action", "actor", "actress", "actual",
    "adapt", "add", "addict", "address", "adjust", "admit", "adult", "advance",
    "advice", "aerobic", "affair", "afford", "afraid", "again", "age", "agent",
    "agree", "ahead", "aim", "air", "airport", "aisle", "alarm", "album",
    "alcohol", "alert", "alien", "all", "alley", "allow", "almost", "alone",
    "alpha", "already", "also", "alter", "always", "amateur", "amazing", "among",
];

/// Account Creator used by the desktop shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAccountCreator;

impl DemoAccountCreator {
    pub fn new() -> Self {
        Self
    }
}

impl AccountCreator for DemoAccountCreator {
    fn create_account(&self) -> Result<Session> {
        let mut rng = rand::rng();

        let mut key = [0u8; 32];
        rng.fill(&mut key);
        let mut address = [0u8; 20];
        rng.fill(&mut address);

        let words = (0..SEED_PHRASE_WORDS)
            .map(|_| WORD_LIST[rng.random_range(0..WORD_LIST.len())].to_string())
            .collect();

        let session = Session::new(
            format!("0x{}", hex::encode(address)),
            "0",
            PrivateKey::new(format!("0x{}", hex::encode(key))),
            SeedPhrase::from_words(words)?,
        );
        tracing::info!(address = %session.address(), "Generated demo account");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_account_shape() {
        let session = DemoAccountCreator::new().create_account().unwrap();

        assert_eq!(session.address().len(), 42);
        assert!(session.address().starts_with("0x"));
        assert_eq!(session.private_key().expose().len(), 66);
        assert_eq!(session.balance(), "0");
        assert_eq!(session.seed_phrase().words().len(), SEED_PHRASE_WORDS);
        assert!(session.seed_phrase().words().iter().all(|w| WORD_LIST.contains(&w.as_str())));
    }

    #[test]
    fn test_created_account_survives_serialization() {
        let session = DemoAccountCreator::new().create_account().unwrap();
        let restored = Session::from_json(&session.to_json().unwrap()).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_accounts_differ() {
        let creator = DemoAccountCreator::new();
        let a = creator.create_account().unwrap();
        let b = creator.create_account().unwrap();
        assert_ne!(a.private_key(), b.private_key());
    }

    #[test]
    fn test_key_material_is_lowercase_hex() {
        let session = DemoAccountCreator::new().create_account().unwrap();
        let address = session.address().trim_start_matches("0x");
        let key = session.private_key().expose().trim_start_matches("0x");

        assert_eq!(hex::decode(address).unwrap().len(), 20);
        assert_eq!(hex::decode(key).unwrap().len(), 32);
        assert!(address.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
