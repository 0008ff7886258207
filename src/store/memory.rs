use super::*;

use std::sync::Mutex;

/// Keeps the collection in process memory. Nothing survives a restart.
pub struct MemStorage {
    data: Mutex<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(Vec::new()),
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Mutex::new(contacts),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("memory store poisoned")))?;
        Ok(data.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("memory store poisoned")))?;
        *data = contacts.to_vec();
        Ok(())
    }

    fn location(&self) -> &str {
        "memory"
    }
}
