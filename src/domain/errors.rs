/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanBookError {
    /// 書籍が既に貸出中
    AlreadyLoaned,
    /// 貸出日数を足すと返却期限が表現可能な日時を超える
    LoanPeriodOutOfRange,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 既に返却済み
    AlreadyReturned,
    /// 貸出と書籍のISBNが一致しない
    BookMismatch,
}

impl std::fmt::Display for LoanBookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanBookError::AlreadyLoaned => f.write_str("Book is already on loan"),
            LoanBookError::LoanPeriodOutOfRange => {
                f.write_str("Loan period puts the due date out of range")
            }
        }
    }
}

impl std::fmt::Display for ReturnBookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnBookError::AlreadyReturned => f.write_str("Loan has already been returned"),
            ReturnBookError::BookMismatch => f.write_str("Book does not belong to this loan"),
        }
    }
}
