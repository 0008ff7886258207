use super::*;

use std::io::{Read, Write};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub struct JsonStorage {
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Makes sure the storage file exists. Safe to call repeatedly;
    /// existing content is never touched.
    pub fn init(&self) -> Result<(), AppError> {
        if fs::exists(Path::new(&self.path))? {
            return Ok(());
        }

        create_file_parent(&self.path)?;
        fs::write(&self.path, "[]")?;
        info!("Created empty contact storage at {}", self.path);
        Ok(())
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        self.init()?;

        let mut file = fs::File::open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).map_err(|source| AppError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts = serde_json::to_string_pretty(contacts)?;

        create_file_parent(&self.path)?;
        let dir = match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Write next to the target then rename over it, so a crash mid-write
        // leaves the previous collection intact.
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json_contacts.as_bytes())?;
        file.flush()?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved {} contacts to {}", contacts.len(), self.path);
        Ok(())
    }

    fn location(&self) -> &str {
        &self.path
    }
}
