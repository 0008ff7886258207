use super::*;

use crate::store::ContactStore;
use tracing::info;

/// CRUD over the persisted contact collection.
///
/// Every call reloads the collection from storage; mutations rewrite the whole
/// collection. Names are unique (case-sensitive) after every completed write.
pub struct ContactBook {
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn location(&self) -> &str {
        self.storage.location()
    }

    pub fn load_all(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.load()
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Contact>, AppError> {
        Ok(self.load_all()?.into_iter().find(|c| c.name == name))
    }

    pub fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.find_by_name(name)?.is_some())
    }

    pub fn add(&self, contact: Contact) -> Result<(), AppError> {
        let mut contacts = self.load_all()?;

        if contacts.iter().any(|c| c.name == contact.name) {
            return Err(AppError::DuplicateName(contact.name));
        }

        info!("Adding contact '{}'", contact.name);
        contacts.push(contact);
        self.storage.save(&contacts)
    }

    /// `old_name` is the lookup key; the record keeps its position.
    pub fn update(&self, old_name: &str, new_contact: Contact) -> Result<(), AppError> {
        let mut contacts = self.load_all()?;

        let index = contacts
            .iter()
            .position(|c| c.name == old_name)
            .ok_or_else(|| AppError::NotFound(old_name.to_string()))?;

        if new_contact.name != old_name
            && contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && c.name == new_contact.name)
        {
            return Err(AppError::DuplicateName(new_contact.name));
        }

        info!("Updating contact '{}' -> '{}'", old_name, new_contact.name);
        contacts[index] = new_contact;
        self.storage.save(&contacts)
    }

    pub fn delete(&self, name: &str) -> Result<(), AppError> {
        let mut contacts = self.load_all()?;

        let index = contacts
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        info!("Deleting contact '{}'", name);
        contacts.remove(index);
        self.storage.save(&contacts)
    }
}
