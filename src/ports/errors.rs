use thiserror::Error;

/// リポジトリのエラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 更新対象が存在しない
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// ストレージのロックが汚染された（保持中のスレッドがpanicした）
    #[error("{0} storage lock poisoned")]
    LockPoisoned(&'static str),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// 通知のエラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// チャネルでの配信に失敗した
    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: String, reason: String },

    /// 複数チャネルのうち一部が失敗した
    #[error("{} of {attempted} channels failed", .failures.len())]
    Partial {
        attempted: usize,
        failures: Vec<NotificationError>,
    },
}

impl NotificationError {
    pub fn delivery(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Delivery {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}
