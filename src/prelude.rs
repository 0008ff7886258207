pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    book::ContactBook,
    contact::{self, Contact, ValidationReq},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStorage, MemStorage, parse_store};
pub use crate::validation::{ContactForm, validate_form};
pub use crate::web::{self, AppState, router};
