pub mod json;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

pub const DEFAULT_STORAGE_PATH: &str = "./data/contacts.json";

/// Whole-collection persistence. Every `save` replaces what was stored before.
pub trait ContactStore: Send + Sync {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn location(&self) -> &str;
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Picks the storage medium for this run.
pub fn parse_store(path: &str, in_memory: bool) -> Result<Box<dyn ContactStore>, AppError> {
    if in_memory {
        return Ok(Box::new(MemStorage::new()));
    }

    let storage = JsonStorage::new(path);
    storage.init()?;
    Ok(Box::new(storage))
}
