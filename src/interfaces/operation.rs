// ============================================================================
// Transaction Operation Interface
// Defines the contract every operation builder exposes to transaction assembly
// ============================================================================

use crate::domain::errors::BuildError;
use crate::xdr::{Limits, Operation, WriteXdr};

/// Anything that can be turned into a wire operation.
///
/// A transaction-assembly layer holds a list of `Box<dyn TransactionOperation>`
/// and builds each one when the envelope is put together.
pub trait TransactionOperation: Send + Sync {
    /// Validate the user-facing fields and assemble the wire record.
    ///
    /// Either the whole record is returned or the first failing field is
    /// reported; nothing is cached between calls.
    fn build_xdr(&self) -> Result<Operation, BuildError>;

    /// Build and serialise in one step.
    fn build_xdr_bytes(&self) -> Result<Vec<u8>, BuildError> {
        self.build_xdr_bytes_with_limits(Limits::none())
    }

    /// Build and serialise, refusing output larger than `limits`.
    fn build_xdr_bytes_with_limits(&self, limits: Limits) -> Result<Vec<u8>, BuildError> {
        self.build_xdr()?
            .to_xdr(limits)
            .map_err(BuildError::encoding)
    }
}
