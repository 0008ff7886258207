//! A small server-rendered contact book.
//!
//! Contacts live in a single JSON file that is read in full on every request
//! and rewritten in full on every change. Names are the primary key and stay
//! unique across writes.
//!
//! Run the web app:
//! ```sh
//! contact-book serve --port 3000
//! ```
//!
//! Or work on the same file from the terminal:
//! ```sh
//! contact-book add --name Seli --email seli@gmail.com --phone 085712345678
//! contact-book list
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod store;
pub mod validation;
pub mod web;
