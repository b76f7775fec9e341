use crate::domain::Member;

use super::errors::NotificationError;

pub type Result<T> = std::result::Result<T, NotificationError>;

/// 通知ポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMSなど。複数チャネルへの配信は`CompositeNotifier`で合成する。
pub trait Notifier: Send + Sync {
    /// 会員に通知を送る
    fn notify(&self, member: &Member, subject: &str, message: &str) -> Result<()>;
}
