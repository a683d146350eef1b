// ============================================================================
// Account Codec Interface
// Defines the contract for turning account addresses into wire keys
// ============================================================================

use crate::domain::account::AccountIdError;
use crate::xdr::PublicKey;

/// Strategy interface for account-ID string formats.
/// Default implementation: `StrKeyCodec` (56-character "G..." addresses).
pub trait AccountIdCodec: Send + Sync {
    /// Decode a textual account address into its wire public key
    fn decode(&self, address: &str) -> Result<PublicKey, AccountIdError>;

    /// Encode a wire public key back into its textual address
    fn encode(&self, key: &PublicKey) -> String;

    /// Get the codec name for logging
    fn name(&self) -> &str;
}
