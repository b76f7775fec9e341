use crate::domain::{Isbn, MemberId};
use crate::ports::RepositoryError;
use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// 書籍が存在しない
    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// 書籍が貸出中
    #[error("Book is not available for loan: {0}")]
    BookNotAvailable(Isbn),

    /// 貸出日数が大きすぎて返却期限を計算できない
    #[error("Loan period of {0} days is out of range")]
    LoanPeriodOutOfRange(u32),

    /// 貸出は既に返却済み
    #[error("Loan has already been returned")]
    AlreadyReturned,

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] RepositoryError),
}

impl LoanApplicationError {
    /// 貸出の前提条件（存在・貸出可否）違反か
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound(_) | Self::MemberNotFound(_) | Self::BookNotAvailable(_)
        )
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
