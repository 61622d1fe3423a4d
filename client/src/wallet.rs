//! Loads signing keys from local wallet files.

use std::path::Path;

use anyhow::Context;
use solana_sdk::signature::Keypair;

const SECRET_KEY_LEN: usize = 32;
const KEYPAIR_LEN: usize = 64;

/// Reads a wallet file holding a JSON array of key bytes, the format written by
/// `solana-keygen`.
pub fn read_wallet_file(path: impl AsRef<Path>) -> anyhow::Result<Keypair> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read wallet file {}", path.display()))?;
    parse_wallet(&contents).with_context(|| format!("Invalid wallet file {}", path.display()))
}

/// Parses a JSON byte array as either a full 64-byte keypair (secret key followed by public key)
/// or a bare 32-byte secret key.
pub fn parse_wallet(contents: &str) -> anyhow::Result<Keypair> {
    let bytes: Vec<u8> =
        serde_json::from_str(contents).context("Expected a JSON array of bytes")?;

    match bytes.len() {
        KEYPAIR_LEN => Keypair::try_from(bytes.as_slice()).context("Invalid keypair bytes"),
        SECRET_KEY_LEN => {
            let mut secret = [0u8; SECRET_KEY_LEN];
            secret.copy_from_slice(&bytes);
            Ok(Keypair::new_from_array(secret))
        }
        len => Err(anyhow::Error::msg(format!(
            "Expected {SECRET_KEY_LEN} or {KEYPAIR_LEN} key bytes, found {len}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::signature::{
        Keypair,
        Signer,
    };

    use super::*;

    fn to_json(bytes: &[u8]) -> String {
        serde_json::to_string(bytes).unwrap()
    }

    #[test]
    fn parse_full_keypair() {
        let keypair = Keypair::new();
        let parsed = parse_wallet(&to_json(&keypair.to_bytes())).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn parse_secret_key() {
        let keypair = Keypair::new_from_array([7; 32]);
        let parsed = parse_wallet(&to_json(&[7; 32])).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn reject_bad_wallets() {
        assert!(parse_wallet("not json").is_err());
        assert!(parse_wallet(&to_json(&[1; 16])).is_err());
        assert!(parse_wallet("[256, 0]").is_err());

        // Secret and public halves that don't belong together.
        let mut mismatched = Keypair::new().to_bytes();
        mismatched[32..].copy_from_slice(&Keypair::new().pubkey().to_bytes());
        assert!(parse_wallet(&to_json(&mismatched)).is_err());
    }

    #[test]
    fn read_missing_file() {
        let error = read_wallet_file("definitely/not/here.json").unwrap_err();
        assert!(format!("{error:#}").contains("Couldn't read wallet file"));
    }
}
