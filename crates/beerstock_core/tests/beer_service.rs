use beerstock_core::{
    Beer, BeerDto, BeerId, BeerKey, BeerRepository, BeerService, BeerServiceError, BeerType,
    BeerValidationError, InMemoryBeerRepository, RepoResult,
};
use std::cell::RefCell;

/// Store double that records every call before delegating to memory.
#[derive(Default)]
struct RecordingRepository {
    inner: InMemoryBeerRepository,
    calls: RefCell<Vec<String>>,
}

impl RecordingRepository {
    fn seeded(beers: &[BeerDto]) -> Self {
        let repo = Self::default();
        for dto in beers {
            repo.inner.save(&to_beer(dto)).unwrap();
        }
        repo
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn count(&self, op: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(':').next() == Some(op))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl BeerRepository for RecordingRepository {
    fn save(&self, beer: &Beer) -> RepoResult<Beer> {
        self.record(format!("save:{}", beer.name));
        self.inner.save(beer)
    }

    fn find_by_id(&self, id: BeerId) -> RepoResult<Option<Beer>> {
        self.record(format!("find_by_id:{id}"));
        self.inner.find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Beer>> {
        self.record(format!("find_by_name:{name}"));
        self.inner.find_by_name(name)
    }

    fn find_all(&self) -> RepoResult<Vec<Beer>> {
        self.record("find_all".to_string());
        self.inner.find_all()
    }

    fn delete_by_id(&self, id: BeerId) -> RepoResult<()> {
        self.record(format!("delete_by_id:{id}"));
        self.inner.delete_by_id(id)
    }
}

fn skol() -> BeerDto {
    BeerDto::new("Skol", "Ambev", 50, 10, BeerType::Lager)
}

fn to_beer(dto: &BeerDto) -> Beer {
    Beer {
        id: dto.id,
        name: dto.name.clone(),
        brand: dto.brand.clone(),
        max: dto.max,
        quantity: dto.quantity,
        kind: dto.kind,
    }
}

#[test]
fn create_persists_new_beer_and_returns_assigned_id() {
    let repo = RecordingRepository::default();
    let service = BeerService::with_default_mapper(&repo);

    let created = service.create_beer(&skol()).unwrap();

    assert_eq!(created.id, Some(1));
    assert_eq!(created.name, "Skol");
    assert_eq!(created.brand, "Ambev");
    assert_eq!(created.max, 50);
    assert_eq!(created.quantity, 10);
    assert_eq!(created.kind, BeerType::Lager);
    assert_eq!(repo.calls(), vec!["find_by_name:Skol", "save:Skol"]);
    assert_eq!(service.find_by_name("Skol").unwrap(), created);
}

#[test]
fn create_with_registered_name_fails_without_writing() {
    let repo = RecordingRepository::seeded(&[skol()]);
    let service = BeerService::with_default_mapper(&repo);

    let mut duplicate = skol();
    duplicate.brand = "Other".to_string();
    let err = service.create_beer(&duplicate).unwrap_err();

    assert!(matches!(err, BeerServiceError::AlreadyRegistered(ref name) if name == "Skol"));
    assert_eq!(repo.count("save"), 0);
    assert_eq!(repo.inner.len(), 1);
}

#[test]
fn create_with_quantity_above_max_fails_without_store_calls() {
    let repo = RecordingRepository::default();
    let service = BeerService::with_default_mapper(&repo);

    let mut invalid = skol();
    invalid.quantity = 60;
    let err = service.create_beer(&invalid).unwrap_err();

    assert!(matches!(
        err,
        BeerServiceError::Validation(BeerValidationError::QuantityAboveCapacity {
            quantity: 60,
            max: 50
        })
    ));
    assert!(repo.calls().is_empty());
}

#[test]
fn find_by_name_returns_stored_beer() {
    let repo = RecordingRepository::seeded(&[skol()]);
    let service = BeerService::with_default_mapper(&repo);

    let found = service.find_by_name("Skol").unwrap();

    let mut expected = skol();
    expected.id = Some(1);
    assert_eq!(found, expected);
}

#[test]
fn find_by_unknown_name_returns_not_found() {
    let repo = RecordingRepository::default();
    let service = BeerService::with_default_mapper(&repo);

    let err = service.find_by_name("Heineken").unwrap_err();

    assert!(matches!(
        err,
        BeerServiceError::NotFound(BeerKey::Name(ref name)) if name == "Heineken"
    ));
    assert_eq!(err.to_string(), "beer not found with name `Heineken`");
}

#[test]
fn list_all_on_empty_store_returns_empty_list() {
    let repo = RecordingRepository::default();
    let service = BeerService::with_default_mapper(&repo);

    assert!(service.list_all().unwrap().is_empty());
    assert_eq!(repo.calls(), vec!["find_all"]);
}

#[test]
fn list_all_returns_created_beer_with_all_fields() {
    let repo = RecordingRepository::default();
    let service = BeerService::with_default_mapper(&repo);
    let created = service.create_beer(&skol()).unwrap();

    let listed = service.list_all().unwrap();

    assert_eq!(listed, vec![created]);
}

#[test]
fn list_all_preserves_store_order() {
    let brahma = BeerDto::new("Brahma", "Ambev", 80, 30, BeerType::Lager);
    let colorado = BeerDto::new("Colorado Indica", "Colorado", 40, 5, BeerType::Ipa);
    let repo = RecordingRepository::seeded(&[skol(), brahma, colorado]);
    let service = BeerService::with_default_mapper(&repo);

    let names: Vec<String> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|beer| beer.name)
        .collect();

    assert_eq!(names, vec!["Skol", "Brahma", "Colorado Indica"]);
}

#[test]
fn delete_existing_id_removes_beer() {
    let repo = RecordingRepository::seeded(&[skol()]);
    let service = BeerService::with_default_mapper(&repo);

    service.delete_by_id(1).unwrap();

    assert_eq!(repo.calls(), vec!["find_by_id:1", "delete_by_id:1"]);
    assert!(repo.inner.find_by_id(1).unwrap().is_none());
}

#[test]
fn delete_unknown_id_returns_not_found_without_deleting() {
    let repo = RecordingRepository::seeded(&[skol()]);
    let service = BeerService::with_default_mapper(&repo);

    let err = service.delete_by_id(42).unwrap_err();

    assert!(matches!(err, BeerServiceError::NotFound(BeerKey::Id(42))));
    assert_eq!(repo.count("delete_by_id"), 0);
    assert_eq!(repo.inner.len(), 1);
}

#[test]
fn stock_scenario_create_duplicate_find_and_delete_twice() {
    let repo = InMemoryBeerRepository::new();
    let service = BeerService::with_default_mapper(&repo);

    let created = service.create_beer(&skol()).unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.quantity, 10);

    let err = service.create_beer(&skol()).unwrap_err();
    assert!(matches!(err, BeerServiceError::AlreadyRegistered(_)));

    assert_eq!(service.find_by_name("Skol").unwrap(), created);

    service.delete_by_id(id).unwrap();
    let err = service.delete_by_id(id).unwrap_err();
    assert!(matches!(err, BeerServiceError::NotFound(BeerKey::Id(missing)) if missing == id));
}
