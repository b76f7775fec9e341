use crate::domain::{Book, Isbn};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use crate::ports::errors::RepositoryError;
use std::sync::{Mutex, MutexGuard};

/// BookRepositoryのインメモリ実装
///
/// 追加順を保持するVecで管理する。
pub struct BookRepository {
    books: Mutex<Vec<Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    fn books(&self) -> Result<MutexGuard<'_, Vec<Book>>> {
        self.books
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned("book"))
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepositoryTrait for BookRepository {
    fn add(&self, book: Book) -> Result<()> {
        self.books()?.push(book);
        Ok(())
    }

    fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        Ok(self.books()?.iter().find(|b| &b.isbn == isbn).cloned())
    }

    fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books()?.clone())
    }

    fn update(&self, book: Book) -> Result<()> {
        let mut books = self.books()?;
        let slot = books
            .iter_mut()
            .find(|b| b.isbn == book.isbn)
            .ok_or_else(|| RepositoryError::not_found("book", &book.isbn))?;
        *slot = book;
        Ok(())
    }
}
