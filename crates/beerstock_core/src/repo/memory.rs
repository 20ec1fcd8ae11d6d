//! In-memory beer repository.
//!
//! Uses `RefCell` for interior mutability so the `BeerRepository` trait can
//! keep `&self` receivers. Not `Sync`; intended for tests and short-lived
//! single-threaded callers.

use crate::model::beer::{Beer, BeerId};
use crate::repo::beer_repo::{BeerRepository, RepoResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct InMemoryBeerRepository {
    beers: RefCell<BTreeMap<BeerId, Beer>>,
    next_id: Cell<BeerId>,
}

impl Default for InMemoryBeerRepository {
    fn default() -> Self {
        Self {
            beers: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.beers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.beers.borrow().is_empty()
    }
}

impl BeerRepository for InMemoryBeerRepository {
    fn save(&self, beer: &Beer) -> RepoResult<Beer> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let saved = Beer {
            id: Some(id),
            ..beer.clone()
        };
        self.beers.borrow_mut().insert(id, saved.clone());
        Ok(saved)
    }

    fn find_by_id(&self, id: BeerId) -> RepoResult<Option<Beer>> {
        Ok(self.beers.borrow().get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Beer>> {
        Ok(self
            .beers
            .borrow()
            .values()
            .find(|beer| beer.name == name)
            .cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Beer>> {
        Ok(self.beers.borrow().values().cloned().collect())
    }

    fn delete_by_id(&self, id: BeerId) -> RepoResult<()> {
        self.beers.borrow_mut().remove(&id);
        Ok(())
    }
}
