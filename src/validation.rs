use serde::Deserialize;

use crate::domain::{AppError, Contact, ContactBook, contact::ValidationReq};

/// Submitted contact fields. `oldName` is only present on edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "oldName")]
    pub old_name: Option<String>,
}

impl ContactForm {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            old_name: self.old_name.map(|n| n.trim().to_string()),
        }
    }

    pub fn into_contact(self) -> Contact {
        Contact::new(self.name, self.email, self.phone)
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            old_name: Some(contact.name.clone()),
        }
    }
}

/// Runs every rule and returns the messages of those that failed.
///
/// The duplicate rule is skipped when the submitted name equals the submitted
/// `oldName`, i.e. an edit that keeps the name. The exemption trusts the form
/// field, not the stored record.
pub fn validate_form(form: &ContactForm, book: &ContactBook) -> Result<Vec<String>, AppError> {
    let mut errors = Vec::new();
    let contact = Contact::new(form.name.clone(), form.email.clone(), form.phone.clone());

    if !contact.validate_name() {
        errors.push(ValidationReq::name_req());
    } else if form.old_name.as_deref() != Some(form.name.as_str())
        && book.exists_by_name(&form.name)?
    {
        errors.push(ValidationReq::duplicate_req());
    }

    if !contact.validate_email()? {
        errors.push(ValidationReq::email_req());
    }

    if !contact.validate_phone()? {
        errors.push(ValidationReq::phone_req());
    }

    Ok(errors)
}
