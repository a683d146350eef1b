// ============================================================================
// Account Addresses
// StrKey codec for 56-character "G..." account identifiers
// ============================================================================

use crate::interfaces::AccountIdCodec;
use crate::xdr::{PublicKey, Uint256};
use std::fmt;

/// Characters in a textual address
const ADDRESS_LEN: usize = 56;

/// Leading character of an ed25519 account address
const ACCOUNT_PREFIX: char = 'G';

/// Errors raised while decoding an account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountIdError {
    /// Address does not have exactly 56 characters
    InvalidLength(usize),
    /// Address is not an account key (seed, contract, muxed, ...)
    InvalidPrefix(char),
    /// Bad base32 or checksum
    Malformed,
}

impl fmt::Display for AccountIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountIdError::InvalidLength(len) => write!(
                f,
                "invalid account address length: expected {}, got {}",
                ADDRESS_LEN, len
            ),
            AccountIdError::InvalidPrefix(c) => {
                write!(f, "account address must start with 'G', got {:?}", c)
            },
            AccountIdError::Malformed => write!(f, "malformed account address"),
        }
    }
}

impl std::error::Error for AccountIdError {}

/// Default account codec for "G..." addresses, backed by `stellar_strkey`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrKeyCodec;

impl AccountIdCodec for StrKeyCodec {
    fn decode(&self, address: &str) -> Result<PublicKey, AccountIdError> {
        if address.len() != ADDRESS_LEN {
            return Err(AccountIdError::InvalidLength(address.len()));
        }
        match address.chars().next() {
            Some(ACCOUNT_PREFIX) => {},
            Some(c) => return Err(AccountIdError::InvalidPrefix(c)),
            None => return Err(AccountIdError::InvalidLength(0)),
        }

        let key = stellar_strkey::ed25519::PublicKey::from_string(address)
            .map_err(|_| AccountIdError::Malformed)?;
        Ok(PublicKey::PublicKeyTypeEd25519(Uint256(key.0)))
    }

    fn encode(&self, key: &PublicKey) -> String {
        let PublicKey::PublicKeyTypeEd25519(Uint256(bytes)) = key;
        stellar_strkey::ed25519::PublicKey(*bytes).to_string()
    }

    fn name(&self) -> &str {
        "strkey"
    }
}
