use crate::domain::{Member, MemberId};

use super::errors::RepositoryError;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 会員リポジトリポート
///
/// 会員は作成後に変更されないため、更新操作は持たない。
pub trait MemberRepository: Send + Sync {
    /// 会員を追加する（重複キーの検査なし）
    fn add(&self, member: Member) -> Result<()>;

    /// 会員IDで検索する
    fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// 全会員を追加順で取得する
    fn find_all(&self) -> Result<Vec<Member>>;
}
