mod errors;
mod loan_service;
mod overdue_detection;
mod return_outcome;

pub use errors::{LoanApplicationError, Result};
pub use loan_service::{ServiceDependencies, list_loans, loan_book, return_book};
pub use overdue_detection::detect_overdue_loans;
pub use return_outcome::ReturnOutcome;
