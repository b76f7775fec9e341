use crate::domain::Member;
use crate::ports::errors::NotificationError;
use crate::ports::notifier::{Notifier, Result};
use std::sync::Arc;

/// 複数チャネルへの一斉通知
///
/// 登録順に各チャネルへ配信する。1つのチャネルが失敗しても残りのチャネルには
/// 配信を続け、失敗はまとめて`NotificationError::Partial`として返す。
#[derive(Clone, Default)]
pub struct CompositeNotifier {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl CompositeNotifier {
    pub fn new(notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    /// チャネルを末尾に追加する
    pub fn with(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for CompositeNotifier {
    fn notify(&self, member: &Member, subject: &str, message: &str) -> Result<()> {
        let failures: Vec<NotificationError> = self
            .notifiers
            .iter()
            .filter_map(|notifier| notifier.notify(member, subject, message).err())
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            failed = failures.len(),
            attempted = self.notifiers.len(),
            "Some notification channels failed"
        );
        Err(NotificationError::Partial {
            attempted: self.notifiers.len(),
            failures,
        })
    }
}
