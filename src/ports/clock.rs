use chrono::{DateTime, Utc};

/// 時計ポート
///
/// ドメインロジックが壁時計を直接読まないよう、現在時刻を注入する。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
