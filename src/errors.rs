use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Contact '{0}' not found")]
    NotFound(String),

    #[error("Name Already Registered: '{0}'")]
    DuplicateName(String),

    #[error("Contact storage at {path} is corrupt: {source}")]
    StorageCorrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Could not serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not render page: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Expected business outcomes, as opposed to hard failures.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::DuplicateName(_) | AppError::Validation(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateName(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::NOT_FOUND {
            return (status, Html("<h1>404: Not Found</h1>")).into_response();
        }

        if !self.is_expected() {
            error!("Request failed: {self}");
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_storage_corrupt_message() {
        let source = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let err = AppError::StorageCorrupt {
            path: "./data/contacts.json".to_string(),
            source,
        };

        assert!(format!("{}", err).contains("Contact storage at ./data/contacts.json is corrupt"));
        assert!(!err.is_expected());
    }

    #[test]
    fn maps_business_errors_to_status() {
        let not_found = AppError::NotFound("Uche".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let duplicate = AppError::DuplicateName("Uche".to_string()).into_response();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);

        let io = AppError::Io(std::io::Error::other("disk gone")).into_response();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
