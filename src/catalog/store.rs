use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::debug;

use crate::catalog::layout::{find_unique_file, list_databases};
use crate::core::address::{parse_address, Address, AddressError};
use crate::core::sequence::Sequence;
use crate::parsing::index::{read_index_file, EntryIndex};
use crate::parsing::lookup::read_lookup_file;
use crate::parsing::record::extract_record;
use crate::parsing::ParseError;
use crate::utils::validation::{validate_database_name, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Could not locate database: {0}")]
    DatabaseNotFound(String),

    #[error("Cannot find entry '{id}' in database '{database}'")]
    EntryNotFound { database: String, id: String },

    #[error("No .{extension} file in {}", .dir.display())]
    MissingFile { dir: PathBuf, extension: String },

    #[error("Expected one .{extension} file in {}, found {}", .dir.display(), .candidates.len())]
    AmbiguousFile {
        dir: PathBuf,
        extension: String,
        candidates: Vec<PathBuf>,
    },

    #[error("Invalid database name: {0}")]
    InvalidName(#[from] ValidationError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Default extension of index files
pub const DEFAULT_INDEX_EXTENSION: &str = "idx";

/// Default extension of lookup files
pub const DEFAULT_LOOKUP_EXTENSION: &str = "lkp";

/// File naming conventions used to locate a database's files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Extension of the single index file in each database directory
    pub index_extension: String,

    /// Extension of the single lookup file in each database directory
    pub lookup_extension: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_extension: DEFAULT_INDEX_EXTENSION.to_string(),
            lookup_extension: DEFAULT_LOOKUP_EXTENSION.to_string(),
        }
    }
}

/// Decoded files of one database. Each part is filled at most once.
#[derive(Debug, Default)]
struct CachedDatabase {
    index: Option<Arc<EntryIndex>>,

    /// Sequence file path as stored in the lookup file, relative to the database directory
    sequence_file: Option<PathBuf>,
}

/// Read-only access to a directory of indexed flat-file databases.
///
/// Index and lookup files are decoded on first use of each database and kept
/// for the life of the catalog. Population is serialized per database name,
/// so each database's files are decoded at most once even when `resolve` is
/// called from several threads.
#[derive(Debug)]
pub struct DatabaseCatalog {
    root: PathBuf,
    config: CatalogConfig,
    cache: Mutex<HashMap<String, Arc<Mutex<CachedDatabase>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Cache entries are only ever filled, never left half-written, so a poisoned
    // lock still guards consistent data
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DatabaseCatalog {
    /// Open a catalog rooted at `root` with the default file extensions
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RootNotFound` if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        Self::with_config(root, CatalogConfig::default())
    }

    /// Open a catalog rooted at `root` with custom file extensions
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RootNotFound` if `root` is not a directory.
    pub fn with_config(root: impl Into<PathBuf>, config: CatalogConfig) -> Result<Self, CatalogError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CatalogError::RootNotFound(root));
        }

        Ok(Self {
            root,
            config,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Root directory holding one subdirectory per database
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Names of the databases available under the root, sorted
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the root cannot be listed.
    pub fn databases(&self) -> Result<Vec<String>, CatalogError> {
        list_databases(&self.root)
    }

    /// Number of databases whose files have been decoded so far
    pub fn cached_databases(&self) -> usize {
        lock(&self.cache)
            .values()
            .filter(|slot| lock(slot).index.is_some())
            .count()
    }

    /// Parse address text and resolve it
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Address` for malformed text, otherwise as [`Self::resolve`].
    pub fn fetch(&self, text: &str) -> Result<Address, CatalogError> {
        self.resolve(parse_address(text)?)
    }

    /// Retrieve the bases an address refers to and attach them to it.
    ///
    /// When the internal start or the stop is non-zero, the half-open slice
    /// `[address.start(), address.stop())` of the record is returned;
    /// otherwise the whole record is.
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidName` if the database name is not a safe directory name
    /// - `CatalogError::DatabaseNotFound` if the database directory does not exist
    ///   or its index has no entries
    /// - `CatalogError::MissingFile` / `CatalogError::AmbiguousFile` if the
    ///   database does not hold exactly one index and one lookup file
    /// - `CatalogError::EntryNotFound` if the id is not in the index
    /// - `CatalogError::Parse` if any database file is malformed
    pub fn resolve(&self, address: Address) -> Result<Address, CatalogError> {
        let name = validate_database_name(&address.database)?;
        let db_dir = self.root.join(name);
        if !db_dir.is_dir() {
            return Err(CatalogError::DatabaseNotFound(address.database));
        }

        let (index, sequence_file) = self.load(name, &db_dir)?;

        let offset = *index
            .get(&address.id)
            .ok_or_else(|| CatalogError::EntryNotFound {
                database: address.database.clone(),
                id: address.id.clone(),
            })?;

        let bases = Sequence::from(extract_record(&db_dir.join(sequence_file), offset)?);
        debug!(address = %address, offset, bases = bases.len(), "Extracted record");

        let sequence = if address.selects_subrange() {
            bases.slice(address.start(), address.stop())
        } else {
            bases
        };

        Ok(address.with_sequence(sequence))
    }

    /// Decoded index and sequence file path for a database, populating the
    /// cache on first use
    fn load(&self, name: &str, db_dir: &Path) -> Result<(Arc<EntryIndex>, PathBuf), CatalogError> {
        let slot = Arc::clone(lock(&self.cache).entry(name.to_string()).or_default());
        let mut cached = lock(&slot);

        let index = match &cached.index {
            Some(index) => Arc::clone(index),
            None => {
                let path = find_unique_file(db_dir, &self.config.index_extension)?;
                let index = Arc::new(read_index_file(&path)?);
                debug!(database = name, entries = index.len(), "Cached index");
                cached.index = Some(Arc::clone(&index));
                index
            }
        };

        if index.is_empty() {
            return Err(CatalogError::DatabaseNotFound(name.to_string()));
        }

        let sequence_file = match &cached.sequence_file {
            Some(path) => path.clone(),
            None => {
                let path = find_unique_file(db_dir, &self.config.lookup_extension)?;
                let sequence_file = read_lookup_file(&path)?;
                debug!(database = name, sequence_file = %sequence_file.display(), "Cached sequence file");
                cached.sequence_file = Some(sequence_file.clone());
                sequence_file
            }
        };

        Ok((index, sequence_file))
    }
}
