// ============================================================================
// Numeric Module
// Exact amount and price conversions for the wire format
// ============================================================================
//
// This module provides:
// - Amount: non-negative fixed-point quantity with 7 fractional digits
// - Price: positive n/d fraction with 32-bit terms
// - NumericError: which parsing rule an input broke
//
// Design principles:
// - No floating-point operations
// - Invalid input is refused, never rounded (amounts)
// - Prices use the last continued-fraction convergent that fits
// - rust_decimal only at API boundaries

pub mod amount;
mod errors;
pub mod price;

pub use amount::Amount;
pub use errors::{NumericError, NumericResult};
pub use price::{Convergents, Price};
