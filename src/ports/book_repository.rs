use crate::domain::{Book, Isbn};

use super::errors::RepositoryError;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 書籍リポジトリポート
///
/// 書籍の保管とISBNによる検索を抽象化する。
pub trait BookRepository: Send + Sync {
    /// 書籍を追加する
    ///
    /// 重複キーの検査は行わない（呼び出し側の責務）。
    fn add(&self, book: Book) -> Result<()>;

    /// ISBNで書籍を検索する（最初に追加されたものを返す）
    fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// 全書籍を追加順で取得する
    ///
    /// 戻り値はスナップショット。後の追加を見るには再取得が必要。
    fn find_all(&self) -> Result<Vec<Book>>;

    /// 同じISBNを持つ最初の書籍を置き換える
    ///
    /// 存在しない場合は`RepositoryError::NotFound`。
    fn update(&self, book: Book) -> Result<()>;
}
