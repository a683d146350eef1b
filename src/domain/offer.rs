// ============================================================================
// Manage Offer Operation
// Create, update or delete a standing offer on the ledger exchange
// ============================================================================

use crate::domain::account::StrKeyCodec;
use crate::domain::asset::{Asset, AssetError};
use crate::domain::config::{DeletePlaceholder, DELETE_AMOUNT};
use crate::domain::errors::{BuildError, BuildResult, OfferField};
use crate::interfaces::{AccountIdCodec, TransactionOperation};
use crate::numeric::{amount, price};
use crate::numeric::NumericError;
use crate::xdr::{ManageSellOfferOp, MuxedAccount, Operation, OperationBody, PublicKey};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the three manage-offer semantics an operation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OfferMode {
    /// New offer, offer id 0
    Create,
    /// Change an existing offer identified by its id
    Update,
    /// Remove an existing offer: amount 0, placeholder pair and price
    Delete,
}

/// Manage-offer operation builder.
///
/// Holds the user-facing values exactly as given. Nothing is validated at
/// construction time; [`ManageOffer::build`] checks every field and either
/// returns the complete wire operation or the first failing field.
///
/// # Example
/// ```
/// use manage_offer::prelude::*;
///
/// let usd = Asset::issued("USD", "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA");
/// let op = ManageOffer::create(Asset::native(), usd, "100", "2:1");
///
/// let wire = op.build().unwrap();
/// assert!(wire.source_account.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageOffer {
    selling: Arc<Asset>,
    buying: Arc<Asset>,
    amount: String,
    price: String,
    offer_id: u64,
    mode: OfferMode,
    source_account: Option<String>,
}

impl ManageOffer {
    // ========================================================================
    // Construction
    // ========================================================================

    /// New offer. The offer id is fixed at 0.
    pub fn create(
        selling: impl Into<Arc<Asset>>,
        buying: impl Into<Arc<Asset>>,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            selling: selling.into(),
            buying: buying.into(),
            amount: amount.into(),
            price: price.into(),
            offer_id: 0,
            mode: OfferMode::Create,
            source_account: None,
        }
    }

    /// Update an existing offer. Whether `offer_id` exists is for the
    /// ledger to decide.
    pub fn update(
        selling: impl Into<Arc<Asset>>,
        buying: impl Into<Arc<Asset>>,
        amount: impl Into<String>,
        price: impl Into<String>,
        offer_id: u64,
    ) -> Self {
        Self {
            offer_id,
            mode: OfferMode::Update,
            ..Self::create(selling, buying, amount, price)
        }
    }

    /// Delete an offer, using the protocol's placeholder pair and price.
    pub fn delete(offer_id: u64) -> Self {
        Self::delete_with(offer_id, &DeletePlaceholder::default())
    }

    /// Delete an offer with explicit placeholder values.
    pub fn delete_with(offer_id: u64, placeholder: &DeletePlaceholder) -> Self {
        Self {
            selling: Arc::new(placeholder.selling.clone()),
            buying: Arc::new(placeholder.buying.clone()),
            amount: DELETE_AMOUNT.to_string(),
            price: placeholder.price.clone(),
            offer_id,
            mode: OfferMode::Delete,
            source_account: None,
        }
    }

    /// Run this operation on behalf of another account.
    pub fn with_source_account(mut self, address: impl Into<String>) -> Self {
        self.source_account = Some(address.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn selling(&self) -> &Asset {
        &self.selling
    }

    pub fn buying(&self) -> &Asset {
        &self.buying
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn offer_id(&self) -> u64 {
        self.offer_id
    }

    pub fn mode(&self) -> OfferMode {
        self.mode
    }

    pub fn source_account(&self) -> Option<&str> {
        self.source_account.as_deref()
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Build the wire operation with the default account codec.
    pub fn build(&self) -> BuildResult<Operation> {
        self.build_with(&StrKeyCodec)
    }

    /// Build the wire operation, decoding account addresses with `codec`.
    ///
    /// Returns a fresh record on every call; repeated calls on the same
    /// builder produce identical results.
    pub fn build_with(&self, codec: &dyn AccountIdCodec) -> BuildResult<Operation> {
        let result = self.assemble(codec);

        match &result {
            Ok(op) => tracing::debug!(
                "Built manage offer operation: mode={:?} offer_id={} body={:?}",
                self.mode,
                self.offer_id,
                op.body
            ),
            Err(e) => tracing::warn!(
                "Failed to build manage offer operation (mode={:?}, offer_id={}, codec={}): {}",
                self.mode,
                self.offer_id,
                codec.name(),
                e
            ),
        }

        result
    }

    fn assemble(&self, codec: &dyn AccountIdCodec) -> BuildResult<Operation> {
        let selling = self
            .selling
            .encode_with(codec)
            .map_err(|e| BuildError::asset(OfferField::Selling, e))?;

        let buying = self
            .buying
            .encode_with(codec)
            .map_err(|e| BuildError::asset(OfferField::Buying, e))?;

        // Delete placeholders are exempt: the ledger ignores them.
        if self.mode != OfferMode::Delete && selling == buying {
            return Err(BuildError::asset(OfferField::Buying, AssetError::SameAsset));
        }

        let amount = amount::parse(&self.amount).map_err(BuildError::amount)?;
        let price = price::approximate(&self.price).map_err(BuildError::price)?;
        let offer_id = i64::try_from(self.offer_id)
            .map_err(|_| BuildError::offer_id(NumericError::Overflow))?;

        let source_account = self
            .source_account
            .as_deref()
            .map(|address| codec.decode(address).map(muxed))
            .transpose()
            .map_err(BuildError::source_account)?;

        Ok(Operation {
            source_account,
            body: OperationBody::ManageSellOffer(ManageSellOfferOp {
                selling,
                buying,
                amount: amount.raw_value(),
                price: price.into(),
                offer_id,
            }),
        })
    }
}

fn muxed(key: PublicKey) -> MuxedAccount {
    let PublicKey::PublicKeyTypeEd25519(key) = key;
    MuxedAccount::Ed25519(key)
}

impl TransactionOperation for ManageOffer {
    fn build_xdr(&self) -> BuildResult<Operation> {
        self.build()
    }
}

// ============================================================================
// Tests
// ============================================================================
