use crate::ports::RepositoryError;
use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] RepositoryError),
}

pub type Result<T> = std::result::Result<T, BookApplicationError>;
