mod book_service;
mod errors;

pub use book_service::{ServiceDependencies, add_book, list_books};
pub use errors::{BookApplicationError, Result};
