//! Beer stock domain model.
//!
//! # Responsibility
//! - Define the storage shape (`Beer`) and the transfer shape (`BeerDto`).
//! - Validate transfer input before it reaches persistence.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another beer.
//! - `quantity` never exceeds `max` for a validated record.
//! - Both shapes carry the same fields so mapping is lossless.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned identifier for one beer record.
pub type BeerId = i64;

/// Upper bound for `name` and `brand` length, in characters.
pub const MAX_TEXT_CHARS: usize = 200;
/// Upper bound for the `max` capacity field.
pub const MAX_CAPACITY: u32 = 500;
/// Upper bound for the `quantity` field.
pub const MAX_QUANTITY: u32 = 100;

/// Beer style used as the category tag of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    /// Stable lowercase text used for storage and CLI input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lager => "lager",
            Self::Malzbier => "malzbier",
            Self::Witbier => "witbier",
            Self::Weiss => "weiss",
            Self::Ale => "ale",
            Self::Ipa => "ipa",
            Self::Stout => "stout",
        }
    }

    /// Parses stable text produced by [`BeerType::as_str`], case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lager" => Some(Self::Lager),
            "malzbier" => Some(Self::Malzbier),
            "witbier" => Some(Self::Witbier),
            "weiss" => Some(Self::Weiss),
            "ale" => Some(Self::Ale),
            "ipa" => Some(Self::Ipa),
            "stout" => Some(Self::Stout),
            _ => None,
        }
    }
}

/// Persisted beer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    /// `None` until the store assigns an identifier.
    pub id: Option<BeerId>,
    /// Unique across all stored records.
    pub name: String,
    pub brand: String,
    /// Maximum stock capacity.
    pub max: u32,
    /// Current stock quantity.
    pub quantity: u32,
    pub kind: BeerType,
}

/// Beer record as exchanged with service callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: BeerType,
}

/// Validation failures for beer transfer input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeerValidationError {
    #[error("beer name must not be blank")]
    BlankName,
    #[error("beer name exceeds {} characters", MAX_TEXT_CHARS)]
    NameTooLong,
    #[error("beer brand must not be blank")]
    BlankBrand,
    #[error("beer brand exceeds {} characters", MAX_TEXT_CHARS)]
    BrandTooLong,
    #[error("max capacity {0} exceeds limit {limit}", limit = MAX_CAPACITY)]
    CapacityTooLarge(u32),
    #[error("quantity {0} exceeds limit {limit}", limit = MAX_QUANTITY)]
    QuantityTooLarge(u32),
    #[error("quantity {quantity} exceeds max capacity {max}")]
    QuantityAboveCapacity { quantity: u32, max: u32 },
}

impl BeerDto {
    /// Creates a transfer record without an identifier.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: u32,
        quantity: u32,
        kind: BeerType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: brand.into(),
            max,
            quantity,
            kind,
        }
    }

    /// Checks field limits and the `quantity <= max` invariant.
    ///
    /// # Errors
    /// - Returns the first violated rule, checked in field order.
    pub fn validate(&self) -> Result<(), BeerValidationError> {
        validate_text(
            &self.name,
            BeerValidationError::BlankName,
            BeerValidationError::NameTooLong,
        )?;
        validate_text(
            &self.brand,
            BeerValidationError::BlankBrand,
            BeerValidationError::BrandTooLong,
        )?;
        if self.max > MAX_CAPACITY {
            return Err(BeerValidationError::CapacityTooLarge(self.max));
        }
        if self.quantity > MAX_QUANTITY {
            return Err(BeerValidationError::QuantityTooLarge(self.quantity));
        }
        if self.quantity > self.max {
            return Err(BeerValidationError::QuantityAboveCapacity {
                quantity: self.quantity,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn validate_text(
    value: &str,
    blank: BeerValidationError,
    too_long: BeerValidationError,
) -> Result<(), BeerValidationError> {
    if value.trim().is_empty() {
        return Err(blank);
    }
    if value.chars().count() > MAX_TEXT_CHARS {
        return Err(too_long);
    }
    Ok(())
}
