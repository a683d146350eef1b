// ============================================================================
// Build Errors
// Tagged error reporting which field of an operation failed and why
// ============================================================================

use crate::domain::account::AccountIdError;
use crate::domain::asset::AssetError;
use crate::numeric::NumericError;
use crate::xdr;
use std::fmt;

/// Error category, independent of the field it occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAmount,
    InvalidPrice,
    InvalidAsset,
    InvalidIssuer,
    InvalidSourceAccount,
    EncodingFailure,
}

/// The logical field of the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    Selling,
    Buying,
    Amount,
    Price,
    OfferId,
    SourceAccount,
    /// The assembled operation body
    Body,
}

impl fmt::Display for OfferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OfferField::Selling => "selling",
            OfferField::Buying => "buying",
            OfferField::Amount => "amount",
            OfferField::Price => "price",
            OfferField::OfferId => "offer_id",
            OfferField::SourceAccount => "source_account",
            OfferField::Body => "body",
        };
        f.write_str(name)
    }
}

/// Underlying failure carried by a [`BuildError`].
#[derive(Debug)]
pub enum BuildCause {
    Numeric(NumericError),
    Asset(AssetError),
    Account(AccountIdError),
    Xdr(xdr::Error),
}

impl fmt::Display for BuildCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildCause::Numeric(e) => write!(f, "{}", e),
            BuildCause::Asset(e) => write!(f, "{}", e),
            BuildCause::Account(e) => write!(f, "{}", e),
            BuildCause::Xdr(e) => write!(f, "{}", e),
        }
    }
}

/// Failure while building an operation: `{kind, field, cause}`.
#[derive(Debug)]
pub struct BuildError {
    kind: ErrorKind,
    field: OfferField,
    cause: BuildCause,
}

impl BuildError {
    pub fn amount(cause: NumericError) -> Self {
        Self {
            kind: ErrorKind::InvalidAmount,
            field: OfferField::Amount,
            cause: BuildCause::Numeric(cause),
        }
    }

    pub fn price(cause: NumericError) -> Self {
        Self {
            kind: ErrorKind::InvalidPrice,
            field: OfferField::Price,
            cause: BuildCause::Numeric(cause),
        }
    }

    /// Issuer failures are reported as `InvalidIssuer`, everything else
    /// about the asset as `InvalidAsset`.
    pub fn asset(field: OfferField, cause: AssetError) -> Self {
        let kind = match cause {
            AssetError::Issuer(_) => ErrorKind::InvalidIssuer,
            _ => ErrorKind::InvalidAsset,
        };
        Self {
            kind,
            field,
            cause: BuildCause::Asset(cause),
        }
    }

    /// Offer ids travel as a signed 64-bit integer on the wire.
    pub fn offer_id(cause: NumericError) -> Self {
        Self {
            kind: ErrorKind::EncodingFailure,
            field: OfferField::OfferId,
            cause: BuildCause::Numeric(cause),
        }
    }

    pub fn source_account(cause: AccountIdError) -> Self {
        Self {
            kind: ErrorKind::InvalidSourceAccount,
            field: OfferField::SourceAccount,
            cause: BuildCause::Account(cause),
        }
    }

    pub fn encoding(cause: xdr::Error) -> Self {
        Self {
            kind: ErrorKind::EncodingFailure,
            field: OfferField::Body,
            cause: BuildCause::Xdr(cause),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn field(&self) -> OfferField {
        self.field
    }

    pub fn cause(&self) -> &BuildCause {
        &self.cause
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to set '{}' field: {}", self.field, self.cause)
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            BuildCause::Numeric(e) => Some(e),
            BuildCause::Asset(e) => Some(e),
            BuildCause::Account(e) => Some(e),
            BuildCause::Xdr(e) => Some(e),
        }
    }
}

/// Result type alias for operation building
pub type BuildResult<T> = Result<T, BuildError>;
