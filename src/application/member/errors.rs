use crate::ports::RepositoryError;
use thiserror::Error;

/// 会員管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum MemberApplicationError {
    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] RepositoryError),
}

pub type Result<T> = std::result::Result<T, MemberApplicationError>;
