// ============================================================================
// Manage Offer Library
// Builds ledger operations that create, update or delete exchange offers
// ============================================================================

//! # Manage Offer
//!
//! Client-side construction of the "manage offer" ledger operation.
//!
//! ## Features
//!
//! - **Exact fixed-point amounts**: 7 fractional digits, no silent rounding
//! - **Continued-fraction prices**: decimals become the best `n/d` pair that
//!   fits into two 32-bit integers
//! - **Create / update / delete** constructors with protocol-mandated
//!   placeholders for deletion
//! - **Bit-exact XDR output** for network submission
//!
//! ## Example
//!
//! ```rust
//! use manage_offer::prelude::*;
//!
//! let usd = Asset::issued("USD", "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA");
//!
//! // Sell 100 native units for USD at 2 USD each
//! let offer = ManageOffer::create(Asset::native(), usd, "100", "2:1");
//! let bytes = offer.build_xdr_bytes().unwrap();
//! println!("encoded operation: {} bytes", bytes.len());
//!
//! // Cancel offer 42
//! let cancel = ManageOffer::delete(42);
//! assert!(cancel.build().is_ok());
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

/// Ledger wire types (`stellar_xdr::curr`)
pub use stellar_xdr::curr as xdr;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AccountIdError, Asset, AssetError, BuildError, DeletePlaceholder, ErrorKind, ManageOffer,
        OfferField, OfferMode, StrKeyCodec,
    };
    pub use crate::interfaces::{AccountIdCodec, TransactionOperation};
    pub use crate::numeric::{Amount, NumericError, Price};
    pub use crate::xdr::{Limits, WriteXdr};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{amount, price};
    use crate::xdr::{self, OperationBody, ReadXdr};

    const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

    fn body(op: &ManageOffer) -> xdr::ManageSellOfferOp {
        match op.build().unwrap().body {
            OperationBody::ManageSellOffer(body) => body,
            other => panic!("unexpected operation body: {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_create_update_delete() {
        let usd = Asset::issued("USD", ISSUER);

        let create = body(&ManageOffer::create(Asset::native(), usd.clone(), "100.0000000", "2:1"));
        assert_eq!(create.offer_id, 0);
        assert_eq!(create.amount, 1_000_000_000);
        assert_eq!(create.price, xdr::Price { n: 2, d: 1 });

        let update = body(&ManageOffer::update(Asset::native(), usd, "50", "3.14159265", 1234));
        assert_eq!(update.offer_id, 1234);
        assert_eq!(update.amount, 500_000_000);
        assert_eq!(
            update.price,
            xdr::Price {
                n: 62_831_853,
                d: 20_000_000
            }
        );

        let delete = body(&ManageOffer::delete(1234));
        assert_eq!(delete.amount, 0);
        assert_eq!(delete.offer_id, 1234);
        assert_ne!(delete.selling, delete.buying);
    }

    #[test]
    fn test_numeric_cores_agree_with_builder() {
        let op = body(&ManageOffer::create(
            Asset::native(),
            Asset::issued("EUR", ISSUER),
            "0.1",
            "1.25",
        ));

        let expected_amount = amount::parse("0.1").unwrap();
        let expected_price = price::approximate("1.25").unwrap();
        assert_eq!(op.amount, expected_amount.raw_value());
        assert_eq!(op.price, xdr::Price::from(expected_price));
    }

    #[test]
    fn test_bytes_decode_back_to_built_operation() {
        let offer = ManageOffer::update(Asset::native(), Asset::issued("EUR", ISSUER), "7", "0.5", 99);
        let bytes = offer.build_xdr_bytes().unwrap();

        let decoded = xdr::Operation::from_xdr(&bytes, Limits::none()).unwrap();
        assert_eq!(decoded, offer.build().unwrap());
    }

    #[test]
    fn test_amount_format_roundtrip() {
        for s in ["0", "1", "0.0000001", "100.5", "922337203685.4775807"] {
            let a = amount::parse(s).unwrap();
            assert_eq!(amount::parse(&amount::format(a)).unwrap(), a);
        }
    }

    #[test]
    fn test_error_reports_field_and_kind() {
        let op = ManageOffer::create(Asset::native(), Asset::issued("USD", ISSUER), "1", "0");
        let err = op.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPrice);
        assert_eq!(err.field(), OfferField::Price);
        assert!(err.to_string().starts_with("failed to set 'price' field"));
    }
}
