// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod account_codec;
mod operation;

pub use account_codec::AccountIdCodec;
pub use operation::TransactionOperation;
