use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use super::{
    AppState, flash,
    views::{AboutPage, ContactFormPage, ContactListPage, DetailPage, HomePage, render},
};
use crate::{
    domain::{Contact, ContactBook},
    errors::AppError,
    validation::{ContactForm, validate_form},
};

/// Outcome of a validated write.
enum Submission {
    Saved,
    Rejected(ContactForm, Vec<String>),
}

fn find_or_not_found(book: &ContactBook, name: String) -> Result<Contact, AppError> {
    book.find_by_name(&name)?.ok_or(AppError::NotFound(name))
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let contact_count = state.with_book(|book| Ok(book.load_all()?.len())).await?;

    render(HomePage {
        title: "Welcome Home",
        contact_count,
    })
}

pub async fn about() -> Result<Html<String>, AppError> {
    render(AboutPage {
        title: "About Page",
    })
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let contacts = state.with_book(|book| book.load_all()).await?;
    let flash = flash::read(&headers);
    let had_flash = flash.is_some();

    let page = render(ContactListPage {
        title: "Contact Page",
        contacts,
        flash,
    })?;

    if had_flash {
        Ok(flash::consumed(page))
    } else {
        Ok(page.into_response())
    }
}

pub async fn add_form() -> Result<Html<String>, AppError> {
    render(ContactFormPage::add(ContactForm::default(), Vec::new()))
}

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    // a new contact has no previous name to be exempt from the duplicate rule
    let form = ContactForm {
        old_name: None,
        ..form.trimmed()
    };

    let submission = state
        .with_book(move |book| {
            let errors = validate_form(&form, book)?;
            if !errors.is_empty() {
                return Ok(Submission::Rejected(form, errors));
            }

            book.add(form.into_contact())?;
            Ok(Submission::Saved)
        })
        .await?;

    match submission {
        Submission::Saved => Ok(flash::redirect_with(
            "/contact",
            "Contact added successfully!",
        )),
        Submission::Rejected(form, errors) => {
            debug!("Rejected new contact '{}': {:?}", form.name, errors);
            let page = render(ContactFormPage::add(form, errors))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
    }
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state
        .with_book(move |book| find_or_not_found(book, name))
        .await?;

    render(DetailPage {
        title: "Detail Contact Page",
        contact,
    })
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state
        .with_book(move |book| find_or_not_found(book, name))
        .await?;

    render(ContactFormPage::edit(ContactForm::from(&contact), Vec::new()))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();
    let Some(old_name) = form.old_name.clone() else {
        return Err(AppError::Validation("oldName is required".to_string()));
    };

    let submission = state
        .with_book(move |book| {
            let errors = validate_form(&form, book)?;
            if !errors.is_empty() {
                return Ok(Submission::Rejected(form, errors));
            }

            book.update(&old_name, form.into_contact())?;
            Ok(Submission::Saved)
        })
        .await?;

    match submission {
        Submission::Saved => Ok(flash::redirect_with(
            "/contact",
            "Contact updated successfully!",
        )),
        Submission::Rejected(form, errors) => {
            debug!("Rejected update of '{}': {:?}", form.name, errors);
            let page = render(ContactFormPage::edit(form, errors))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
    }
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    state.with_book(move |book| book.delete(&name)).await?;

    Ok(flash::redirect_with(
        "/contact",
        "Contact deleted successfully!",
    ))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404: Not Found</h1>"))
}
