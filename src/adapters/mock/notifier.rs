use crate::domain::{Member, MemberId};
use crate::ports::errors::NotificationError;
use crate::ports::notifier::{Notifier, Result};
use std::sync::Mutex;

/// 記録された通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub member_id: MemberId,
    pub subject: String,
    pub message: String,
}

/// Notifierのモック実装
///
/// 実際には送信せず、送られた通知を記録する。
/// `failing()`で作成すると記録した上でエラーを返す。
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotification>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に配信失敗を返すモック
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// 記録された通知（送信順）
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// 指定した会員宛ての通知
    pub fn sent_to(&self, member_id: MemberId) -> Vec<SentNotification> {
        self.sent()
            .into_iter()
            .filter(|n| n.member_id == member_id)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, member: &Member, subject: &str, message: &str) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentNotification {
                member_id: member.member_id,
                subject: subject.to_string(),
                message: message.to_string(),
            });
        }

        if self.fail {
            return Err(NotificationError::delivery("recording", "configured to fail"));
        }
        Ok(())
    }
}
