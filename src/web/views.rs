use askama::Template;
use axum::response::Html;

use crate::{domain::Contact, errors::AppError, validation::ContactForm};

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage<'a> {
    pub title: &'a str,
    pub contact_count: usize,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage<'a> {
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactListPage<'a> {
    pub title: &'a str,
    pub contacts: Vec<Contact>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage<'a> {
    pub title: &'a str,
    pub contact: Contact,
}

/// Add and edit share one form; `editing` switches the target and the hidden `oldName`.
#[derive(Template)]
#[template(path = "contact-form.html")]
pub struct ContactFormPage<'a> {
    pub title: &'a str,
    pub action: &'a str,
    pub editing: bool,
    pub form: ContactForm,
    pub errors: Vec<String>,
}

impl<'a> ContactFormPage<'a> {
    pub fn add(form: ContactForm, errors: Vec<String>) -> Self {
        Self {
            title: "Add New Contact Page",
            action: "/contact",
            editing: false,
            form,
            errors,
        }
    }

    pub fn edit(form: ContactForm, errors: Vec<String>) -> Self {
        Self {
            title: "Edit Contact Page",
            action: "/contact/update",
            editing: true,
            form,
            errors,
        }
    }

    pub fn old_name(&self) -> &str {
        self.form.old_name.as_deref().unwrap_or_default()
    }
}

pub fn render(page: impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
