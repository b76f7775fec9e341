use crate::domain::{Book, BookAdded, commands::AddBook};
use crate::ports::BookRepository;
use std::sync::Arc;

use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
}

/// 書籍をカタログに追加する
///
/// 新しい書籍は貸出可能な状態で登録される。
/// ISBNの重複は検査しない。
pub fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookAdded> {
    let book = Book::new(cmd.title, cmd.author, cmd.isbn);
    let event = BookAdded {
        isbn: book.isbn.clone(),
        title: book.title.clone(),
    };

    deps.book_repository
        .add(book)
        .map_err(BookApplicationError::RepositoryError)?;

    tracing::info!(isbn = %event.isbn, "Book added: {}", event.title);

    Ok(event)
}

/// 全書籍を追加順で取得する
pub fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_repository
        .find_all()
        .map_err(BookApplicationError::RepositoryError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::BookRepository as InMemoryBookRepository;
    use crate::domain::Isbn;

    fn deps() -> ServiceDependencies {
        ServiceDependencies {
            book_repository: Arc::new(InMemoryBookRepository::new()),
        }
    }

    #[test]
    fn test_add_book_registers_available_book() {
        let deps = deps();

        let event = add_book(
            &deps,
            AddBook {
                title: "Clean Code".to_string(),
                author: "Robert C. Martin".to_string(),
                isbn: Isbn::from("978-1"),
            },
        )
        .unwrap();

        assert_eq!(event.isbn, Isbn::from("978-1"));
        let books = list_books(&deps).unwrap();
        assert_eq!(books.len(), 1);
        assert!(books[0].available);
        assert_eq!(books[0].author, "Robert C. Martin");
    }
}
