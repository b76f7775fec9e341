use crate::domain::{Isbn, Loan, MemberId};

use super::errors::RepositoryError;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 貸出リポジトリポート
///
/// 返却済みの貸出も履歴として保持し、削除しない。
pub trait LoanRepository: Send + Sync {
    /// 貸出を追加する
    fn add(&self, loan: Loan) -> Result<()>;

    /// 未返却の貸出を検索する
    ///
    /// ISBNと会員IDの完全一致、かつ返却日時が未設定のもの。
    /// 複数ある場合は追加順で最初のもの（不変条件上は起こらない）。
    fn find_open_loan(&self, isbn: &Isbn, member_id: MemberId) -> Result<Option<Loan>>;

    /// 未返却の貸出をすべて追加順で取得する
    ///
    /// 延滞検出バッチで使用される。
    fn find_open_loans(&self) -> Result<Vec<Loan>>;

    /// 全貸出を追加順で取得する
    fn find_all(&self) -> Result<Vec<Loan>>;

    /// 同じ貸出IDの貸出を置き換える
    ///
    /// 存在しない場合は`RepositoryError::NotFound`。
    fn update(&self, loan: Loan) -> Result<()>;
}
