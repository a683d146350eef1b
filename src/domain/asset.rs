// ============================================================================
// Asset Domain Model
// ============================================================================

use crate::domain::account::{AccountIdError, StrKeyCodec};
use crate::interfaces::AccountIdCodec;
use crate::xdr::{self, AccountId, AlphaNum12, AlphaNum4, AssetCode12, AssetCode4};
use arrayvec::ArrayString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest code that fits the 4-byte wire arm
const ALPHANUM4_LEN: usize = 4;

/// Longest asset code the wire format accepts
pub const MAX_ASSET_CODE_LEN: usize = 12;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetError {
    /// Asset code has no characters
    EmptyCode,
    /// Asset code is longer than 12 characters
    CodeTooLong(usize),
    /// Asset code contains something other than ASCII letters and digits
    InvalidCodeCharacter(char),
    /// Selling and buying assets are the same asset
    SameAsset,
    /// Issuer address could not be decoded
    Issuer(AccountIdError),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::EmptyCode => write!(f, "asset code is empty"),
            AssetError::CodeTooLong(len) => write!(
                f,
                "asset code is {} characters long, maximum is {}",
                len, MAX_ASSET_CODE_LEN
            ),
            AssetError::InvalidCodeCharacter(c) => {
                write!(f, "asset code contains invalid character {:?}", c)
            },
            AssetError::SameAsset => write!(f, "selling and buying assets must differ"),
            AssetError::Issuer(e) => write!(f, "invalid issuer: {}", e),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Issuer(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Asset Code
// ============================================================================

/// Validated asset code: 1-12 ASCII alphanumeric characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetCode(ArrayString<MAX_ASSET_CODE_LEN>);

impl AssetCode {
    pub fn new(code: &str) -> Result<Self, AssetError> {
        if code.is_empty() {
            return Err(AssetError::EmptyCode);
        }
        if let Some(c) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(AssetError::InvalidCodeCharacter(c));
        }

        ArrayString::from(code)
            .map(Self)
            .map_err(|_| AssetError::CodeTooLong(code.len()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Right-pad the code with zero bytes to the wire width `N`.
    fn padded<const N: usize>(&self) -> [u8; N] {
        let mut out = [0u8; N];
        let bytes = self.0.as_bytes();
        out[..bytes.len()].copy_from_slice(bytes);
        out
    }
}

// ============================================================================
// Asset
// ============================================================================

/// A tradable unit: the network's native currency or an issued credit.
///
/// Construction never fails; the code and issuer are validated when the
/// asset is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Asset {
    Native,
    Issued { code: String, issuer: String },
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    pub fn issued(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Issued {
            code: code.into(),
            issuer: issuer.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Issued { code, .. } => Some(code),
        }
    }

    pub fn issuer(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Issued { issuer, .. } => Some(issuer),
        }
    }

    /// Encode with the default account codec.
    pub fn encode(&self) -> Result<xdr::Asset, AssetError> {
        self.encode_with(&StrKeyCodec)
    }

    /// Encode into the wire union.
    ///
    /// Codes of up to four characters use the 4-byte arm, longer codes the
    /// 12-byte arm. The code is checked before the issuer.
    pub fn encode_with(&self, codec: &dyn AccountIdCodec) -> Result<xdr::Asset, AssetError> {
        match self {
            Asset::Native => Ok(xdr::Asset::Native),
            Asset::Issued { code, issuer } => {
                let code = AssetCode::new(code)?;
                let issuer = AccountId(codec.decode(issuer).map_err(AssetError::Issuer)?);

                if code.as_str().len() <= ALPHANUM4_LEN {
                    Ok(xdr::Asset::CreditAlphanum4(AlphaNum4 {
                        asset_code: AssetCode4(code.padded()),
                        issuer,
                    }))
                } else {
                    Ok(xdr::Asset::CreditAlphanum12(AlphaNum12 {
                        asset_code: AssetCode12(code.padded()),
                        issuer,
                    }))
                }
            },
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => write!(f, "native"),
            Asset::Issued { code, issuer } => write!(f, "{}:{}", code, issuer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

    #[test]
    fn test_native_encoding() {
        assert_eq!(Asset::native().encode().unwrap(), xdr::Asset::Native);
        assert!(Asset::native().is_native());
    }

    #[test]
    fn test_short_code_uses_alphanum4() {
        match Asset::issued("USD", ISSUER).encode().unwrap() {
            xdr::Asset::CreditAlphanum4(a) => {
                assert_eq!(&a.asset_code.0, b"USD\0");
                assert_eq!(a.issuer, AccountId(StrKeyCodec.decode(ISSUER).unwrap()));
            },
            other => panic!("unexpected arm: {:?}", other),
        }

        assert!(matches!(
            Asset::issued("ABCD", ISSUER).encode().unwrap(),
            xdr::Asset::CreditAlphanum4(_)
        ));
    }

    #[test]
    fn test_long_code_uses_alphanum12() {
        match Asset::issued("ABCDE", ISSUER).encode().unwrap() {
            xdr::Asset::CreditAlphanum12(a) => {
                assert_eq!(&a.asset_code.0, b"ABCDE\0\0\0\0\0\0\0");
            },
            other => panic!("unexpected arm: {:?}", other),
        }

        assert!(matches!(
            Asset::issued("ABCDEFGHIJKL", ISSUER).encode().unwrap(),
            xdr::Asset::CreditAlphanum12(_)
        ));
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(
            Asset::issued("", ISSUER).encode(),
            Err(AssetError::EmptyCode)
        );
        assert_eq!(
            Asset::issued("ABCDEFGHIJKLM", ISSUER).encode(),
            Err(AssetError::CodeTooLong(13))
        );
        assert_eq!(
            Asset::issued("US-D", ISSUER).encode(),
            Err(AssetError::InvalidCodeCharacter('-'))
        );
        assert_eq!(
            Asset::issued("€", ISSUER).encode(),
            Err(AssetError::InvalidCodeCharacter('€'))
        );
    }

    #[test]
    fn test_code_checked_before_issuer() {
        assert_eq!(
            Asset::issued("", "not-an-account").encode(),
            Err(AssetError::EmptyCode)
        );
    }

    #[test]
    fn test_invalid_issuer() {
        assert_eq!(
            Asset::issued("USD", "GABC").encode(),
            Err(AssetError::Issuer(AccountIdError::InvalidLength(4)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Asset::native().to_string(), "native");
        assert_eq!(
            Asset::issued("USD", ISSUER).to_string(),
            format!("USD:{}", ISSUER)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let asset = Asset::issued("USD", ISSUER);
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);
    }
}
