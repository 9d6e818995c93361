//! Persistence adapters for the cart.
//!
//! The cart store never touches the filesystem directly: it talks to a
//! [`CartStorage`] implementation, so it can be exercised without a real
//! backend. The persisted layout is a single slot holding one JSON array
//! of cart lines.

use shared::model::cart_line::CartLine;

use std::{
    cell::RefCell,
    error::Error,
    fmt,
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    rc::Rc,
};

#[derive(Debug, PartialEq, Eq)]
pub enum CartStorageError {
    CannotOpenFile(String),
    CannotParseFile(String),
    CannotWriteFile(String),
}

impl fmt::Display for CartStorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CartStorageError {}

/// Adapters report failures honestly; deciding to swallow them is the
/// cart store's job.
pub trait CartStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError>;
    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError>;
}

/// File-backed slot: one JSON array of cart lines.
#[derive(Debug, Clone)]
pub struct JsonFileCartStorage {
    path: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new(path: &str) -> Self {
        JsonFileCartStorage {
            path: PathBuf::from(path),
        }
    }
}

impl CartStorage for JsonFileCartStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        let file = File::open(&self.path)
            .map_err(|err| CartStorageError::CannotOpenFile(err.to_string()))?;
        let buf = BufReader::new(file);
        serde_json::from_reader(buf)
            .map_err(|err| CartStorageError::CannotParseFile(err.to_string()))
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        let file = File::create(&self.path)
            .map_err(|err| CartStorageError::CannotWriteFile(err.to_string()))?;
        let buf = BufWriter::new(file);
        serde_json::to_writer(buf, lines)
            .map_err(|err| CartStorageError::CannotWriteFile(err.to_string()))
    }
}

/// In-memory slot. Clones share the slot, which also lets tests simulate
/// a page reload by handing the same slot to a fresh store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStorage {
    slot: Rc<RefCell<Vec<CartLine>>>,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for InMemoryCartStorage {
    fn load(&self) -> Result<Vec<CartLine>, CartStorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), CartStorageError> {
        *self.slot.borrow_mut() = lines.to_vec();
        Ok(())
    }
}
