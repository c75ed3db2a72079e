//! Opaque wrapper for the Solana signing keypair.
//!
//! [`SolanaPrivateKey`] decodes-and-validates once, at settings
//! construction, and has no stringification of the secret half: `Debug`
//! redacts, and there is no `Display` or `Serialize` at all. The derived
//! public key is the only value that leaves this type freely.

use std::fmt;
use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use thiserror::Error;

/// Why a private-key blob failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyDecodeError {
    /// The value is not valid base58.
    #[error("not valid base58")]
    Base58,

    /// The decoded blob has the wrong length.
    #[error("expected a 64-byte keypair, got {0} bytes")]
    Length(usize),

    /// The bytes do not form a valid ed25519 keypair.
    #[error("not a valid ed25519 keypair")]
    Ed25519,
}

/// A validated Solana signing keypair.
///
/// The inner [`Keypair`] is shared behind an `Arc` so capability methods
/// can hand it to derived clients without re-decoding.
#[derive(Clone)]
pub struct SolanaPrivateKey {
    keypair: Arc<Keypair>,
}

impl SolanaPrivateKey {
    /// Decode a base58-encoded 64-byte keypair (the wallet-export format).
    ///
    /// The error never contains the raw input.
    pub fn from_base58(encoded: &str) -> Result<Self, KeyDecodeError> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|_| KeyDecodeError::Base58)?;
        if bytes.len() != 64 {
            return Err(KeyDecodeError::Length(bytes.len()));
        }
        let keypair = Keypair::from_bytes(&bytes).map_err(|_| KeyDecodeError::Ed25519)?;
        Ok(Self {
            keypair: Arc::new(keypair),
        })
    }

    /// The derived public key.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// A shared handle to the signing keypair.
    pub fn keypair(&self) -> Arc<Keypair> {
        Arc::clone(&self.keypair)
    }
}

impl fmt::Debug for SolanaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaPrivateKey")
            .field("pubkey", &self.pubkey().to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_keypair() -> (Keypair, String) {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();
        (keypair, encoded)
    }

    #[test]
    fn decodes_wallet_export_format() {
        let (keypair, encoded) = encoded_keypair();
        let key = SolanaPrivateKey::from_base58(&encoded).unwrap();
        assert_eq!(key.pubkey(), keypair.pubkey());
    }

    #[test]
    fn pubkey_is_deterministic() {
        let (_, encoded) = encoded_keypair();
        let a = SolanaPrivateKey::from_base58(&encoded).unwrap();
        let b = SolanaPrivateKey::from_base58(&encoded).unwrap();
        assert_eq!(a.pubkey(), b.pubkey());
    }

    #[test]
    fn rejects_non_base58() {
        let err = SolanaPrivateKey::from_base58("not-base58-0OIl").unwrap_err();
        assert_eq!(err, KeyDecodeError::Base58);
    }

    #[test]
    fn rejects_wrong_length() {
        let short = bs58::encode([7u8; 32]).into_string();
        let err = SolanaPrivateKey::from_base58(&short).unwrap_err();
        assert_eq!(err, KeyDecodeError::Length(32));
    }

    #[test]
    fn debug_shows_pubkey_only() {
        let (keypair, encoded) = encoded_keypair();
        let key = SolanaPrivateKey::from_base58(&encoded).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains(&keypair.pubkey().to_string()));
        assert!(!debug.contains(&encoded));
    }
}
