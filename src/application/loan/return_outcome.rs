use crate::domain::Fine;
use serde::Serialize;

/// 返却結果
///
/// 返却は失敗しても例外ではなく、この3通りのいずれかとして報告される。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    /// 返却完了（延滞金は0の場合もある）
    Success { fine: Fine },
    /// 該当する未返却の貸出がない
    NotFound,
    /// 返却処理中のエラー
    Error { message: String },
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 成功時の延滞金
    pub fn fine(&self) -> Option<Fine> {
        match self {
            Self::Success { fine } => Some(*fine),
            _ => None,
        }
    }
}
