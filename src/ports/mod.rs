pub mod book_repository;
pub mod clock;
pub mod errors;
pub mod loan_repository;
pub mod member_repository;
pub mod notifier;

pub use book_repository::BookRepository;
pub use clock::Clock;
pub use errors::{NotificationError, RepositoryError};
pub use loan_repository::LoanRepository;
pub use member_repository::MemberRepository;
pub use notifier::Notifier;
