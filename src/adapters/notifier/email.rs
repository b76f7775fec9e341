use crate::domain::Member;
use crate::ports::notifier::{Notifier, Result};

/// メール通知（送信はシミュレーション）
///
/// 実際の配信は行わず、送信内容をtracingイベントとして記録する。
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for EmailNotifier {
    fn notify(&self, member: &Member, subject: &str, _message: &str) -> Result<()> {
        tracing::info!(
            channel = "email",
            member_id = %member.member_id,
            "E-mail sent to {}. Subject: {}",
            member.name,
            subject
        );
        Ok(())
    }
}
