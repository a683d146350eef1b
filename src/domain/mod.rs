// ============================================================================
// Domain Models Module
// Assets, accounts and the manage-offer operation builder
// ============================================================================

pub mod account;
pub mod asset;
pub mod config;
pub mod errors;
pub mod offer;

pub use account::{AccountIdError, StrKeyCodec};
pub use asset::{Asset, AssetCode, AssetError};
pub use config::DeletePlaceholder;
pub use errors::{BuildCause, BuildError, BuildResult, ErrorKind, OfferField};
pub use offer::{ManageOffer, OfferMode};
