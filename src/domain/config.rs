// ============================================================================
// Offer Configuration
// Protocol placeholders used when an offer is deleted
// ============================================================================

use crate::domain::asset::Asset;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code of the dummy buying asset in a delete operation
pub const PLACEHOLDER_ASSET_CODE: &str = "FAKE";

/// Issuer of the dummy buying asset in a delete operation
pub const PLACEHOLDER_ASSET_ISSUER: &str =
    "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

/// Price written into a delete operation (1:1)
pub const PLACEHOLDER_PRICE: &str = "1";

/// Amount that marks a manage-offer operation as a deletion
pub const DELETE_AMOUNT: &str = "0";

// ============================================================================
// Delete Placeholder Policy
// ============================================================================

/// Values written into the fields of a delete operation that the ledger
/// ignores.
///
/// The ledger only looks at the amount (zero) and the offer id, but the
/// submission service still requires two well-formed, distinct assets and
/// a positive price. Changing the wire requirements means changing this
/// one value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeletePlaceholder {
    pub selling: Asset,
    pub buying: Asset,
    pub price: String,
}

impl DeletePlaceholder {
    /// Native selling, `FAKE` buying, price 1.
    pub fn protocol_default() -> Self {
        Self {
            selling: Asset::native(),
            buying: Asset::issued(PLACEHOLDER_ASSET_CODE, PLACEHOLDER_ASSET_ISSUER),
            price: PLACEHOLDER_PRICE.to_string(),
        }
    }

    /// Validate the placeholder pair.
    pub fn validate(&self) -> Result<(), String> {
        if self.selling == self.buying {
            return Err(format!(
                "placeholder selling and buying assets must differ (both {})",
                self.selling
            ));
        }

        if self.price.is_empty() {
            return Err("placeholder price must be set".to_string());
        }

        Ok(())
    }
}

impl Default for DeletePlaceholder {
    fn default() -> Self {
        Self::protocol_default()
    }
}
