//! Beer stock use-case service.
//!
//! # Responsibility
//! - Enforce name uniqueness on create and existence on lookup/delete.
//! - Convert between transfer and storage shapes through the injected mapper.
//!
//! # Invariants
//! - Create writes exactly once on success and never on duplicate/invalid input.
//! - Delete issues a store deletion only after confirming the record exists.
//! - Domain errors are returned as-is; the service never retries.
//! - Create's check-then-save is only atomic if the store serializes writes.

use crate::mapper::{BeerMapper, DefaultBeerMapper};
use crate::model::beer::{BeerDto, BeerId, BeerValidationError};
use crate::repo::beer_repo::{BeerRepository, RepoError};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, BeerServiceError>;

/// Lookup key carried by not-found errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerKey {
    Name(String),
    Id(BeerId),
}

impl Display for BeerKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name `{name}`"),
            Self::Id(id) => write!(f, "id {id}"),
        }
    }
}

/// Errors from beer stock service operations.
#[derive(Debug, Error)]
pub enum BeerServiceError {
    /// A beer with the same name is already registered.
    #[error("beer with name `{0}` is already registered")]
    AlreadyRegistered(String),
    /// No beer matches the lookup key.
    #[error("beer not found with {0}")]
    NotFound(BeerKey),
    /// Input breaks a field limit or the `quantity <= max` rule.
    #[error(transparent)]
    Validation(#[from] BeerValidationError),
    /// Store failure.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Stock service facade over a record store and a mapper.
pub struct BeerService<R: BeerRepository, M: BeerMapper = DefaultBeerMapper> {
    repo: R,
    mapper: M,
}

impl<R: BeerRepository> BeerService<R> {
    /// Creates a service using the field-by-field mapper.
    pub fn with_default_mapper(repo: R) -> Self {
        Self::new(repo, DefaultBeerMapper)
    }
}

impl<R: BeerRepository, M: BeerMapper> BeerService<R, M> {
    pub fn new(repo: R, mapper: M) -> Self {
        Self { repo, mapper }
    }

    /// Registers a new beer.
    ///
    /// # Errors
    /// - `Validation` when the input breaks field limits or `quantity > max`.
    /// - `AlreadyRegistered` when the name is taken.
    pub fn create_beer(&self, dto: &BeerDto) -> ServiceResult<BeerDto> {
        dto.validate()?;
        self.ensure_name_available(&dto.name)?;

        let beer = self.mapper.to_model(dto);
        let saved = self.repo.save(&beer)?;
        Ok(self.mapper.to_dto(&saved))
    }

    /// Gets one beer by exact name.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<BeerDto> {
        self.repo
            .find_by_name(name)?
            .map(|beer| self.mapper.to_dto(&beer))
            .ok_or_else(|| BeerServiceError::NotFound(BeerKey::Name(name.to_string())))
    }

    /// Lists every beer in store order. Empty store yields an empty list.
    pub fn list_all(&self) -> ServiceResult<Vec<BeerDto>> {
        Ok(self
            .repo
            .find_all()?
            .iter()
            .map(|beer| self.mapper.to_dto(beer))
            .collect())
    }

    /// Deletes one beer by identifier after confirming it exists.
    pub fn delete_by_id(&self, id: BeerId) -> ServiceResult<()> {
        if self.repo.find_by_id(id)?.is_none() {
            return Err(BeerServiceError::NotFound(BeerKey::Id(id)));
        }
        self.repo.delete_by_id(id)?;
        Ok(())
    }

    fn ensure_name_available(&self, name: &str) -> ServiceResult<()> {
        match self.repo.find_by_name(name)? {
            Some(_) => Err(BeerServiceError::AlreadyRegistered(name.to_string())),
            None => Ok(()),
        }
    }
}
