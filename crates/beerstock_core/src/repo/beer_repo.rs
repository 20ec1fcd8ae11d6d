//! Beer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the record store API the stock service is written against.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` always inserts; the identifier is assigned by SQLite.
//! - `AUTOINCREMENT` keeps deleted identifiers from being reused.
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::beer::{Beer, BeerId, BeerType};
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

const BEER_SELECT_SQL: &str = "SELECT
    id,
    name,
    brand,
    max,
    quantity,
    type
FROM beers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for beer persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("invalid persisted beer data: {0}")]
    InvalidData(String),
    #[error(
        "connection is not migrated: expected schema version {expected_version}, found {actual_version}"
    )]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record store contract consumed by `BeerService`.
pub trait BeerRepository {
    /// Persists a new record and returns it with its assigned identifier.
    fn save(&self, beer: &Beer) -> RepoResult<Beer>;
    fn find_by_id(&self, id: BeerId) -> RepoResult<Option<Beer>>;
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Beer>>;
    /// Returns all records in ascending identifier order.
    fn find_all(&self) -> RepoResult<Vec<Beer>>;
    /// Removes a record. Missing identifiers are a no-op.
    fn delete_by_id(&self, id: BeerId) -> RepoResult<()>;
}

impl<T: BeerRepository + ?Sized> BeerRepository for &T {
    fn save(&self, beer: &Beer) -> RepoResult<Beer> {
        (**self).save(beer)
    }

    fn find_by_id(&self, id: BeerId) -> RepoResult<Option<Beer>> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Beer>> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> RepoResult<Vec<Beer>> {
        (**self).find_all()
    }

    fn delete_by_id(&self, id: BeerId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }
}

/// SQLite-backed beer repository.
pub struct SqliteBeerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBeerRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not current.
    /// - `MissingRequiredTable` when `beers` does not exist.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'beers'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable("beers"));
        }

        Ok(Self { conn })
    }
}

impl BeerRepository for SqliteBeerRepository<'_> {
    fn save(&self, beer: &Beer) -> RepoResult<Beer> {
        self.conn.execute(
            "INSERT INTO beers (name, brand, max, quantity, type)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                beer.name.as_str(),
                beer.brand.as_str(),
                beer.max,
                beer.quantity,
                beer.kind.as_str(),
            ],
        )?;

        Ok(Beer {
            id: Some(self.conn.last_insert_rowid()),
            ..beer.clone()
        })
    }

    fn find_by_id(&self, id: BeerId) -> RepoResult<Option<Beer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BEER_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt.query_row([id], parse_beer_row).optional()?;
        row.transpose()
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Beer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BEER_SELECT_SQL} WHERE name = ?1;"))?;
        let row = stmt.query_row([name], parse_beer_row).optional()?;
        row.transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Beer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BEER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut beers = Vec::new();

        while let Some(row) = rows.next()? {
            beers.push(parse_beer_row(row)??);
        }

        Ok(beers)
    }

    fn delete_by_id(&self, id: BeerId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM beers WHERE id = ?1;", [id])?;
        Ok(())
    }
}

// Column errors stay in the outer rusqlite result; decode errors in the inner one.
fn parse_beer_row(row: &Row<'_>) -> rusqlite::Result<RepoResult<Beer>> {
    let type_text: String = row.get("type")?;
    let Some(kind) = BeerType::parse(&type_text) else {
        return Ok(Err(RepoError::InvalidData(format!(
            "invalid beer type `{type_text}` in beers.type"
        ))));
    };

    Ok(Ok(Beer {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        brand: row.get("brand")?,
        max: row.get("max")?,
        quantity: row.get("quantity")?,
        kind,
    }))
}
