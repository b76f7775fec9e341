pub mod book;
pub mod loan;
pub mod member;
pub mod notifications;
