use crate::domain::Member;
use crate::ports::notifier::{Notifier, Result};

/// SMS通知（送信はシミュレーション）
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for SmsNotifier {
    fn notify(&self, member: &Member, _subject: &str, message: &str) -> Result<()> {
        tracing::info!(
            channel = "sms",
            member_id = %member.member_id,
            "SMS sent to {}: {}",
            member.name,
            message
        );
        Ok(())
    }
}
