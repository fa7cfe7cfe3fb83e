use crate::errors::{AppError, AppResult};
use crate::models::{CountedTable, NewFoodListing};
use crate::table::{CellValue, DataTable};
use rusqlite::{params, Connection, OpenFlags, Params};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub const EXPECTED_TABLES: [&str; 4] = ["providers", "receivers", "food_listings", "claims"];

const INSERT_LISTING_SQL: &str = "INSERT INTO food_listings
   (Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type)
 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

/// How operations get hold of a SQLite connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStrategy {
    /// Open a fresh connection for every operation and close it afterwards.
    #[default]
    PerOperation,
    /// Keep one connection open and lend it to one operation at a time.
    Shared,
}

#[derive(Debug)]
pub struct Database {
    db_path: PathBuf,
    shared: Option<Mutex<Connection>>,
}

/// A connection held for the duration of one operation. Dropping the lease
/// closes an owned connection or hands a shared one back.
enum Lease<'a> {
    Owned(Connection),
    Shared(MutexGuard<'a, Connection>),
}

impl Deref for Lease<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            Self::Owned(conn) => conn,
            Self::Shared(guard) => &**guard,
        }
    }
}

impl DerefMut for Lease<'_> {
    fn deref_mut(&mut self) -> &mut Connection {
        match self {
            Self::Owned(conn) => conn,
            Self::Shared(guard) => &mut **guard,
        }
    }
}

impl Database {
    /// Points at an existing store. Nothing is opened until the first
    /// operation unless the shared strategy is requested.
    pub fn new(path: &Path, strategy: ConnectionStrategy) -> AppResult<Self> {
        let shared = match strategy {
            ConnectionStrategy::PerOperation => None,
            ConnectionStrategy::Shared => Some(Mutex::new(open_connection(path)?)),
        };
        Ok(Self {
            db_path: path.to_path_buf(),
            shared,
        })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn acquire(&self) -> AppResult<Lease<'_>> {
        match &self.shared {
            Some(shared) => shared
                .lock()
                .map(Lease::Shared)
                .map_err(|_| AppError::Internal("database mutex poisoned".to_string())),
            None => open_connection(&self.db_path).map(Lease::Owned),
        }
    }

    pub fn fetch(&self, sql: &str) -> AppResult<DataTable> {
        self.fetch_with(sql, [])
    }

    pub fn fetch_with<P: Params>(&self, sql: &str, params: P) -> AppResult<DataTable> {
        let conn = self.acquire()?;
        let mut stmt = conn.prepare(sql)?;
        let columns = stmt.column_names().into_iter().map(String::from).collect();
        let mut table = DataTable::new(columns);
        let width = table.column_count();

        let mut rows = stmt.query(params)?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(width);
            for index in 0..width {
                cells.push(CellValue::from_sql(row.get_ref(index)?));
            }
            table.rows.push(cells);
        }
        tracing::debug!(rows = table.row_count(), columns = width, "query fetched");
        Ok(table)
    }

    /// Runs one mutating statement and commits it. Returns the number of
    /// affected rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> AppResult<usize> {
        self.mutate(sql, params).map(|(changed, _)| changed)
    }

    fn mutate<P: Params>(&self, sql: &str, params: P) -> AppResult<(usize, i64)> {
        let mut conn = self.acquire()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(sql, params)?;
        let rowid = tx.last_insert_rowid();
        tx.commit()?;
        Ok((changed, rowid))
    }

    /// Inserts a listing and returns the `Food_ID` the store assigned.
    pub fn insert_listing(&self, listing: &NewFoodListing) -> AppResult<i64> {
        let (_, food_id) = self.mutate(
            INSERT_LISTING_SQL,
            params![
                listing.food_name,
                listing.quantity,
                listing.expiry_date,
                listing.provider_id,
                listing.provider_type,
                listing.location,
                listing.food_type.as_str(),
                listing.meal_type.as_str(),
            ],
        )?;
        tracing::info!(food_id, food_name = %listing.food_name, "food listing created");
        Ok(food_id)
    }

    pub fn count(&self, table: CountedTable) -> AppResult<i64> {
        let result = self.fetch(&format!("SELECT COUNT(*) AS c FROM {}", table.table_name()))?;
        Ok(result.scalar().and_then(CellValue::as_i64).unwrap_or(0))
    }

    /// Expected tables that the store does not have.
    pub fn missing_tables(&self) -> AppResult<Vec<&'static str>> {
        let present = self.fetch("SELECT name FROM sqlite_master WHERE type = 'table'")?;
        Ok(EXPECTED_TABLES
            .into_iter()
            .filter(|name| !present.rows.iter().any(|row| row.first().is_some_and(|cell| cell.matches_text(name))))
            .collect())
    }
}

fn open_connection(path: &Path) -> AppResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(path, flags).map_err(AppError::connection)
}
