use crate::domain::{Isbn, Loan, MemberId};
use crate::ports::errors::RepositoryError;
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use std::sync::{Mutex, MutexGuard};

/// LoanRepositoryのインメモリ実装
///
/// 返却済みの貸出も履歴として残す。
pub struct LoanRepository {
    loans: Mutex<Vec<Loan>>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(Vec::new()),
        }
    }

    fn loans(&self) -> Result<MutexGuard<'_, Vec<Loan>>> {
        self.loans
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned("loan"))
    }
}

impl Default for LoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanRepositoryTrait for LoanRepository {
    fn add(&self, loan: Loan) -> Result<()> {
        self.loans()?.push(loan);
        Ok(())
    }

    fn find_open_loan(&self, isbn: &Isbn, member_id: MemberId) -> Result<Option<Loan>> {
        Ok(self
            .loans()?
            .iter()
            .find(|l| &l.isbn == isbn && l.member_id == member_id && l.is_open())
            .cloned())
    }

    fn find_open_loans(&self) -> Result<Vec<Loan>> {
        Ok(self
            .loans()?
            .iter()
            .filter(|l| l.is_open())
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Loan>> {
        Ok(self.loans()?.clone())
    }

    fn update(&self, loan: Loan) -> Result<()> {
        let mut loans = self.loans()?;
        let slot = loans
            .iter_mut()
            .find(|l| l.loan_id == loan.loan_id)
            .ok_or_else(|| RepositoryError::not_found("loan", loan.loan_id))?;
        *slot = loan;
        Ok(())
    }
}
